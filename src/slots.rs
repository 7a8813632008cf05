use std::sync::{
    atomic::{AtomicUsize, Ordering},
    OnceLock,
};

use crate::error::{Error, Result};

/// Fixed-capacity append-only buffer shared between workers.
///
/// Writers reserve a slot with a single `fetch_add` and then fill it; no two
/// writers ever touch the same slot. Reads happen after the writers are joined,
/// through [`SlotBuffer::into_vec`].
pub struct SlotBuffer<T> {
    what: &'static str,
    slots: Box<[OnceLock<T>]>,
    reserved: AtomicUsize,
}

impl<T> SlotBuffer<T> {
    pub fn new(what: &'static str, capacity: usize) -> Self {
        SlotBuffer {
            what,
            slots: (0..capacity).map(|_| OnceLock::new()).collect(),
            reserved: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.reserved.load(Ordering::Relaxed).min(self.capacity())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` in the next free slot and returns the slot's index.
    pub fn push(&self, value: T) -> Result<usize> {
        let slot = self.reserved.fetch_add(1, Ordering::Relaxed);
        let cell = self.slots.get(slot).ok_or(Error::CapacityExceeded {
            what: self.what,
            capacity: self.capacity(),
        })?;
        // each index is handed out once, so the cell is still empty
        let _ = cell.set(value);
        Ok(slot)
    }

    /// Filled slots in slot order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
            .into_vec()
            .into_iter()
            .filter_map(OnceLock::into_inner)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use super::*;

    #[test]
    fn push_reserves_consecutive_slots() {
        let buffer = SlotBuffer::new("test", 3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.push('a').unwrap(), 0);
        assert_eq!(buffer.push('b').unwrap(), 1);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.into_vec(), vec!['a', 'b']);
    }

    #[test]
    fn overflow_is_an_error() {
        let buffer = SlotBuffer::new("test", 1);
        buffer.push(1).unwrap();
        match buffer.push(2) {
            Err(Error::CapacityExceeded { what, capacity }) => {
                assert_eq!(what, "test");
                assert_eq!(capacity, 1);
            }
            other => panic!("expected capacity error, got {other:?}"),
        }
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.into_vec(), vec![1]);
    }

    #[test]
    fn concurrent_pushes_keep_every_value() {
        let buffer = SlotBuffer::new("test", 10_000);
        (0..10_000u32).into_par_iter().for_each(|i| {
            buffer.push(i).unwrap();
        });
        let mut values = buffer.into_vec();
        values.sort_unstable();
        assert_eq!(values, (0..10_000).collect::<Vec<_>>());
    }
}
