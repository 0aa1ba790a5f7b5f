// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Typed handles onto trail slots.

use super::Trail;
use std::marker::PhantomData;

/// A value that can live in a trail slot.
///
/// The encoding must round-trip: `decode(encode(v)) == v`.
pub trait TrailValue: Copy {
    fn encode(self) -> u64;
    fn decode(raw: u64) -> Self;
}

impl TrailValue for u64 {
    fn encode(self) -> u64 {
        self
    }

    fn decode(raw: u64) -> Self {
        raw
    }
}

impl TrailValue for usize {
    fn encode(self) -> u64 {
        self as u64
    }

    fn decode(raw: u64) -> Self {
        raw as usize
    }
}

impl TrailValue for bool {
    fn encode(self) -> u64 {
        self as u64
    }

    fn decode(raw: u64) -> Self {
        raw != 0
    }
}

// Bit-exact, so NaN payloads and negative zero survive a rewind.
impl TrailValue for f64 {
    fn encode(self) -> u64 {
        self.to_bits()
    }

    fn decode(raw: u64) -> Self {
        f64::from_bits(raw)
    }
}

/// A handle onto one trail slot holding a `T`.
///
/// The handle is plain data; the value itself lives in the [`Trail`], so
/// every write is recorded and undone automatically on backtrack.
///
/// # Example
///
/// ```
/// use jigsaw_solver::trail::Trail;
///
/// let mut trail = Trail::new();
/// let value = trail.register(42u64);
///
/// trail.checkpoint();
/// value.set(&mut trail, 100);
/// assert_eq!(value.get(&trail), 100);
///
/// trail.rewind();
/// assert_eq!(value.get(&trail), 42); // Value restored
/// ```
#[derive(Debug)]
pub struct Trailed<T: TrailValue> {
    slot: usize,
    _phantom: PhantomData<T>,
}

impl<T: TrailValue> Clone for Trailed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TrailValue> Copy for Trailed<T> {}

impl<T: TrailValue> Trailed<T> {
    pub(crate) fn new(slot: usize) -> Self {
        Self {
            slot,
            _phantom: PhantomData,
        }
    }

    /// Get the current value.
    pub fn get(&self, trail: &Trail) -> T {
        T::decode(trail.read(self.slot))
    }

    /// Set the value, recording the old value in the trail.
    pub fn set(&self, trail: &mut Trail, value: T) {
        trail.write(self.slot, value.encode());
    }

    /// Set the value only if its encoding differs from the current one.
    ///
    /// Returns true if the value was changed.
    pub fn maybe_set(&self, trail: &mut Trail, value: T) -> bool {
        let encoded = value.encode();
        if trail.read(self.slot) == encoded {
            false
        } else {
            trail.write(self.slot, encoded);
            true
        }
    }
}
