//! Tower of Hanoi engine.
//!
//! Generates the optimal move sequence with a recursive or an iterative
//! strategy, counts moves without generating them, times the two strategies
//! against each other, and replays a sequence onto a three-peg tower state
//! one move at a time.
//!
//! ```
//! use hanoi_core::{replay, HanoiConfig, Peg, Strategy};
//!
//! let config = HanoiConfig::default();
//! let mut run = replay(3, Strategy::Iterative, &config).unwrap();
//! while run.advance().unwrap().is_some() {}
//! assert!(run.current().is_solved_on(Peg::C));
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod generator;
pub mod peg;
pub mod replay;
pub mod timing;
pub mod tower;

#[cfg(test)]
mod tests;

pub use config::{HanoiConfig, MAX_TIMING_DISKS};
pub use counter::{
    count_iterative, count_moves, count_recursive, growth_curve, log10_moves, parse_disk_count,
    GrowthPoint, Summary, MAX_DISKS,
};
pub use error::{HanoiError, IllegalMoveReason, Operation, Result};
pub use generator::{
    collect_moves, generate, visit_recursive, IterativeMoves, Moves, RecursiveMoves, Strategy,
    WorkItem, MAX_RECURSIVE_DEPTH,
};
pub use peg::{Disk, Move, Peg};
pub use replay::{replay, Replay, Step};
pub use timing::{compare_timings, time_strategies, TimingSample};
pub use tower::Towers;
