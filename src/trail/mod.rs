// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the assembly search.
//!
//! All mutable search state lives in numbered slots owned by the [`Trail`].
//! Every write records the slot's previous value, so rewinding to a
//! checkpoint restores the state exactly as it was, with no work for the
//! predicates that made the changes.

pub mod trailed;

pub use trailed::{TrailValue, Trailed};

/// A single entry in the trail, recording one slot write.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: usize,
    old_value: u64,
}

/// Slot storage plus the undo log of writes to it.
///
/// # Memory Model
///
/// - DYNAMIC: The trail is the only mutable state touched during search
/// - Each SearchContext owns its own trail for independent searches
#[derive(Debug)]
pub struct Trail {
    /// Current value of every slot, encoded as u64
    values: Vec<u64>,
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Stack of checkpoint indices for nested backtracking
    checkpoints: Vec<usize>,
    /// Optional frozen checkpoint that prevents further backtracking
    frozen_checkpoint: Option<usize>,
    /// Most writes that may be outstanding at once
    limit: usize,
}

impl Trail {
    /// Default limit on outstanding writes.
    pub const MAX_SIZE: usize = 16384;

    /// Create a new empty trail holding up to [`Self::MAX_SIZE`] writes.
    pub fn new() -> Self {
        Self::with_limit(Self::MAX_SIZE)
    }

    /// Create a new empty trail holding up to `limit` writes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            values: Vec::new(),
            entries: Vec::with_capacity(limit.min(Self::MAX_SIZE)),
            checkpoints: Vec::with_capacity(64),
            frozen_checkpoint: None,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Allocate a slot holding `initial`, returning a typed handle.
    ///
    /// Allocation is not itself trailed: slots outlive every rewind.
    pub fn register<T: TrailValue>(&mut self, initial: T) -> Trailed<T> {
        let slot = self.values.len();
        self.values.push(initial.encode());
        Trailed::new(slot)
    }

    pub(crate) fn read(&self, slot: usize) -> u64 {
        self.values[slot]
    }

    /// Write a slot, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds its limit (indicates a bug in the search algorithm).
    pub(crate) fn write(&mut self, slot: usize, value: u64) {
        if self.entries.len() >= self.limit {
            panic!("Trail overflow: exceeded {} entries", self.limit);
        }
        let old_value = self.values[slot];
        self.entries.push(TrailEntry { slot, old_value });
        self.values[slot] = value;
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// Returns the checkpoint index.
    pub fn checkpoint(&mut self) -> usize {
        let checkpoint = self.entries.len();
        self.checkpoints.push(checkpoint);
        checkpoint
    }

    /// Rewind the trail to the most recent checkpoint.
    ///
    /// Returns true if there was a checkpoint to rewind to, false otherwise.
    pub fn rewind(&mut self) -> bool {
        match self.checkpoints.pop() {
            Some(checkpoint) => {
                if let Some(frozen) = self.frozen_checkpoint {
                    if checkpoint < frozen {
                        self.checkpoints.push(checkpoint);
                        return false;
                    }
                }
                self.undo_until(checkpoint);
                true
            }
            None => false,
        }
    }

    /// Undo every write made after position `checkpoint`.
    ///
    /// Never rewinds past a frozen point. Checkpoints above the new length
    /// are discarded. Returns false if the freeze stopped the rewind short.
    pub fn rewind_to(&mut self, checkpoint: usize) -> bool {
        let target = match self.frozen_checkpoint {
            Some(frozen) if checkpoint < frozen => frozen,
            _ => checkpoint,
        };
        self.undo_until(target);
        while matches!(self.checkpoints.last(), Some(&cp) if cp > target) {
            self.checkpoints.pop();
        }
        target == checkpoint
    }

    fn undo_until(&mut self, length: usize) {
        while self.entries.len() > length {
            if let Some(entry) = self.entries.pop() {
                self.values[entry.slot] = entry.old_value;
            }
        }
    }

    /// Freeze the trail at the current position.
    ///
    /// After freezing, no backtracking past this point is allowed.
    pub fn freeze(&mut self) {
        self.frozen_checkpoint = Some(self.entries.len());
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of active checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Number of allocated slots.
    pub fn slot_count(&self) -> usize {
        self.values.len()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint_depth(), 0);
        assert_eq!(trail.slot_count(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();
        let a = trail.register(10u64);
        let b = trail.register(20u64);

        a.set(&mut trail, 11);
        b.set(&mut trail, 21);
        assert_eq!(trail.len(), 2);

        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);
        assert_eq!(trail.checkpoint_depth(), 1);

        a.set(&mut trail, 12);
        b.set(&mut trail, 22);
        assert_eq!(trail.len(), 4);

        assert!(trail.rewind());
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.checkpoint_depth(), 0);
        assert_eq!(a.get(&trail), 11);
        assert_eq!(b.get(&trail), 21);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        let value = trail.register(0usize);

        value.set(&mut trail, 1);
        trail.checkpoint();
        value.set(&mut trail, 2);
        trail.checkpoint();
        value.set(&mut trail, 3);
        assert_eq!(trail.checkpoint_depth(), 2);

        assert!(trail.rewind());
        assert_eq!(value.get(&trail), 2);
        assert_eq!(trail.checkpoint_depth(), 1);

        assert!(trail.rewind());
        assert_eq!(value.get(&trail), 1);
        assert_eq!(trail.checkpoint_depth(), 0);
    }

    #[test]
    fn test_repeated_writes_restore_oldest() {
        let mut trail = Trail::new();
        let value = trail.register(5u64);
        let start = trail.len();
        for i in 0..10 {
            value.set(&mut trail, i);
        }
        assert!(trail.rewind_to(start));
        assert_eq!(value.get(&trail), 5);
    }

    #[test]
    fn test_rewind_empty() {
        let mut trail = Trail::new();
        assert!(!trail.rewind());
    }

    #[test]
    fn test_freeze() {
        let mut trail = Trail::new();
        let value = trail.register(0u64);

        value.set(&mut trail, 10);
        trail.checkpoint();

        value.set(&mut trail, 20);
        trail.freeze();

        trail.checkpoint();
        value.set(&mut trail, 30);

        // Can rewind recent changes
        assert!(trail.rewind());
        assert_eq!(trail.len(), 2);
        assert_eq!(value.get(&trail), 20);

        // Cannot rewind past freeze point
        assert!(!trail.rewind());
        assert!(!trail.rewind_to(0));
        assert_eq!(value.get(&trail), 20);
    }

    #[test]
    fn test_rewind_to_discards_stale_checkpoints() {
        let mut trail = Trail::new();
        let value = trail.register(false);
        trail.checkpoint();
        value.set(&mut trail, true);
        trail.checkpoint();
        assert_eq!(trail.checkpoint_depth(), 2);

        assert!(trail.rewind_to(0));
        assert_eq!(trail.checkpoint_depth(), 1);
        assert!(!value.get(&trail));
    }

    #[test]
    #[should_panic(expected = "Trail overflow: exceeded 3 entries")]
    fn test_custom_limit() {
        let mut trail = Trail::with_limit(3);
        let value = trail.register(0u64);
        for i in 1..=4 {
            value.set(&mut trail, i);
        }
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        let value = trail.register(0u64);
        for i in 0..Trail::MAX_SIZE as u64 + 1 {
            value.set(&mut trail, i);
        }
    }
}
