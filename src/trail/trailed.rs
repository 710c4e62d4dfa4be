// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Handles to trail slots.

/// Handle to an enumeration code stored in a [`Trail`](super::Trail).
///
/// The handle is only a slot index; the value itself lives in the trail so
/// that rewinding can restore it. Handles are `Copy` and are only meaningful
/// for the trail that issued them.
///
/// # Example
///
/// ```
/// use polyinj_search::trail::Trail;
///
/// let mut trail = Trail::new();
/// let code = trail.register(42);
///
/// let checkpoint = trail.checkpoint();
/// trail.set(code, 100);
/// assert_eq!(trail.get(code), 100);
///
/// trail.rewind_to(checkpoint);
/// assert_eq!(trail.get(code), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailed {
    slot: usize,
}

impl Trailed {
    pub(crate) fn new(slot: usize) -> Self {
        Self { slot }
    }

    /// Slot index within the owning trail.
    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

#[cfg(test)]
mod tests {
    use crate::trail::Trail;

    #[test]
    fn test_slots_are_sequential() {
        let mut trail = Trail::new();
        let v1 = trail.register(42);
        let v2 = trail.register(100);
        let v3 = trail.register(7);
        assert_eq!(v1.slot(), 0);
        assert_eq!(v2.slot(), 1);
        assert_eq!(v3.slot(), 2);
        assert_eq!(trail.get(v2), 100);
    }
}
