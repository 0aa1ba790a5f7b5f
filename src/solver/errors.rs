// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a candidate placement is rejected.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Why a branch of the assembly search was pruned.
///
/// These are not errors: each one just sends the engine on to the next
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum PruneReason {
    /// A wall walked further than the frame side it runs along.
    Overflow,

    /// A wall between two turns matches neither frame side length.
    TurnLength,

    /// Two consecutive walls have the same side length; sides must alternate.
    SideRepeated,

    /// More than four turns on a rectangular boundary.
    TooManyTurns,

    /// The walk did not come back to its start as a closed rectangle.
    NotClosed,
}

impl PruneReason {
    pub const ALL: [PruneReason; 5] = [
        PruneReason::Overflow,
        PruneReason::TurnLength,
        PruneReason::SideRepeated,
        PruneReason::TooManyTurns,
        PruneReason::NotClosed,
    ];
}

impl fmt::Display for PruneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PruneReason::Overflow => write!(f, "overflow"),
            PruneReason::TurnLength => write!(f, "turn length"),
            PruneReason::SideRepeated => write!(f, "side repeated"),
            PruneReason::TooManyTurns => write!(f, "too many turns"),
            PruneReason::NotClosed => write!(f, "not closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_all_lists_every_reason() {
        assert_eq!(PruneReason::ALL.len(), PruneReason::COUNT);
        for (i, reason) in PruneReason::ALL.iter().enumerate() {
            assert_eq!(*reason as usize, i);
        }
    }
}
