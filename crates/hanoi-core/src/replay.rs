//! Move-by-move replay of a move sequence onto a [`Towers`] state.
//!
//! [`Replay`] pulls one move at a time from its source, so a caller can pace
//! playback or stop between any two steps. The retained state is always the
//! last fully applied configuration.

use crate::config::HanoiConfig;
use crate::error::{Operation, Result};
use crate::generator::{generate, Moves, Strategy};
use crate::peg::{Disk, Move};
use crate::tower::Towers;

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based position of the move in the sequence
    pub number: u64,
    pub mv: Move,
    pub disk: Disk,
}

/// Applies moves from `M` to a tower state, validating every one.
///
/// As an iterator it yields the initial configuration followed by one
/// snapshot per applied move. The first illegal move is yielded as an error
/// and ends the replay.
#[derive(Debug, Clone)]
pub struct Replay<M> {
    moves: M,
    towers: Towers,
    applied: u64,
    started: bool,
    halted: bool,
}

impl<M: Iterator<Item = Move>> Replay<M> {
    /// Replay `moves` starting from `disks` disks on peg A.
    pub fn new(disks: u32, moves: M) -> Self {
        Self {
            moves,
            towers: Towers::new(disks),
            applied: 0,
            started: false,
            halted: false,
        }
    }

    /// Last fully applied configuration
    pub fn current(&self) -> &Towers {
        &self.towers
    }

    /// Number of moves applied so far
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Whether the source is exhausted or a move was refused
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Apply the next move.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. An illegal move
    /// halts the replay and leaves [`current`](Self::current) unchanged.
    pub fn advance(&mut self) -> Result<Option<Step>> {
        self.started = true;
        if self.halted {
            return Ok(None);
        }
        let Some(mv) = self.moves.next() else {
            self.halted = true;
            return Ok(None);
        };
        match self.towers.apply(mv) {
            Ok(disk) => {
                self.applied += 1;
                Ok(Some(Step {
                    number: self.applied,
                    mv,
                    disk,
                }))
            }
            Err(e) => {
                log::error!("replay halted after {} moves: {}", self.applied, e);
                self.halted = true;
                Err(e)
            }
        }
    }
}

impl<M: Iterator<Item = Move>> Iterator for Replay<M> {
    type Item = Result<Towers>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Ok(self.towers.clone()));
        }
        match self.advance() {
            Ok(Some(_)) => Some(Ok(self.towers.clone())),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<M: Iterator<Item = Move>> std::iter::FusedIterator for Replay<M> {}

/// Replay the solution for `disks` disks produced by `strategy`.
///
/// Refused with `ResourceLimitExceeded` when `disks` is above the configured
/// animation limit.
pub fn replay(disks: u32, strategy: Strategy, config: &HanoiConfig) -> Result<Replay<Moves>> {
    config.check_limit(disks, Operation::Animate)?;
    log::debug!("replaying {} disks ({})", disks, strategy);
    Ok(Replay::new(disks, generate(disks, strategy)))
}
