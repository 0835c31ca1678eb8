use crate::peg::{Disk, Move, Peg};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was refused by the tower state engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// Nothing to pick up on the source peg
    EmptySource,
    /// Source and destination are the same peg
    SamePeg,
    /// The moved disk is larger than the destination's top disk
    LargerOnSmaller { disk: Disk, top: Disk },
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::EmptySource => write!(f, "source peg is empty"),
            IllegalMoveReason::SamePeg => write!(f, "source and destination are the same peg"),
            IllegalMoveReason::LargerOnSmaller { disk, top } => {
                write!(f, "disk {} cannot rest on smaller disk {}", disk, top)
            }
        }
    }
}

/// Work that is subject to a size limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Building the full move list in memory
    Materialize,
    /// Replaying every configuration for display
    Animate,
    /// Sweeping the timing comparison
    Timing,
    /// Nesting the recursive generator one level per disk
    Recursion,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Materialize => write!(f, "move materialization"),
            Operation::Animate => write!(f, "animation"),
            Operation::Timing => write!(f, "timing comparison"),
            Operation::Recursion => write!(f, "recursive generation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("invalid disk count {requested}: expected 0..={max}")]
    InvalidDiskCount { requested: String, max: u32 },

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalMoveReason },

    #[error("{operation} limited to {limit} disks, {requested} requested")]
    ResourceLimitExceeded {
        requested: u32,
        limit: u32,
        operation: Operation,
    },

    #[error("pegs must be distinct, got source {from}, auxiliary {via}, destination {to}")]
    DuplicatePeg { from: Peg, via: Peg, to: Peg },
}

pub type Result<T> = std::result::Result<T, HanoiError>;
