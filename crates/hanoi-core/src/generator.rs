//! Move generators.
//!
//! Two strategies produce the same ordered move sequence for moving `n` disks
//! from a source peg to a destination peg:
//!
//! - [`RecursiveMoves`] follows the divide-and-conquer definition directly and
//!   uses the call stack, `n` frames deep. Building, advancing and dropping it
//!   all nest once per disk, so it refuses more than [`MAX_RECURSIVE_DEPTH`]
//!   disks.
//! - [`IterativeMoves`] simulates that recursion with an explicit stack of
//!   [`WorkItem`]s, so its depth is bounded by heap memory instead.
//!
//! Both are lazy iterators: each move is produced on demand and neither can be
//! rewound. Build a new generator to start over.

use crate::config::HanoiConfig;
use crate::error::{HanoiError, Operation, Result};
use crate::peg::{Move, Peg};
use serde::{Deserialize, Serialize};

/// Largest disk count the recursive generator accepts.
///
/// Well inside the 2 MiB stack of a spawned thread even in unoptimized
/// builds. Above it, [`generate`] switches to [`IterativeMoves`], which
/// yields the same sequence.
pub const MAX_RECURSIVE_DEPTH: u32 = 1_000;

/// Which generator to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Recursive,
    #[default]
    Iterative,
}

impl Strategy {
    pub fn all() -> &'static [Strategy] {
        &[Strategy::Recursive, Strategy::Iterative]
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" | "rec" | "r" => Ok(Strategy::Recursive),
            "iterative" | "iter" | "i" => Ok(Strategy::Iterative),
            other => Err(format!(
                "unknown strategy '{}' (expected 'recursive' or 'iterative')",
                other
            )),
        }
    }
}

fn check_distinct(from: Peg, via: Peg, to: Peg) -> Result<()> {
    if from == via || from == to || via == to {
        return Err(HanoiError::DuplicatePeg { from, via, to });
    }
    Ok(())
}

fn check_depth(disks: u32) -> Result<()> {
    if disks > MAX_RECURSIVE_DEPTH {
        return Err(HanoiError::ResourceLimitExceeded {
            requested: disks,
            limit: MAX_RECURSIVE_DEPTH,
            operation: Operation::Recursion,
        });
    }
    Ok(())
}

/// Call `visit` with every move for `disks` disks, in order, using native
/// recursion.
///
/// Recurses `disks` frames deep; keep `disks` at or below
/// [`MAX_RECURSIVE_DEPTH`].
pub fn visit_recursive<F: FnMut(Move)>(disks: u32, from: Peg, via: Peg, to: Peg, visit: &mut F) {
    match disks {
        0 => {}
        1 => visit(Move::new(from, to)),
        _ => {
            visit_recursive(disks - 1, from, to, via, visit);
            visit(Move::new(from, to));
            visit_recursive(disks - 1, via, from, to, visit);
        }
    }
}

/// Progress through one level of the recursion
#[derive(Debug, Clone)]
enum Phase {
    /// Moving the `n - 1` disks above the largest one out of the way
    First(Box<RecursiveMoves>),
    /// Only the largest disk's move is left (single-disk problems start here)
    Middle,
    /// Moving the `n - 1` disks back on top of the largest one
    Second(Box<RecursiveMoves>),
    Done,
}

/// Lazy recursive generator.
///
/// Each level holds the generator for its current sub-problem, so pulling a
/// move recurses through at most `disks` nested `next` calls.
#[derive(Debug, Clone)]
pub struct RecursiveMoves {
    disks: u32,
    from: Peg,
    via: Peg,
    to: Peg,
    phase: Phase,
}

impl RecursiveMoves {
    /// Moves for `disks` disks from peg A to peg C through peg B.
    ///
    /// Fails with `ResourceLimitExceeded` above [`MAX_RECURSIVE_DEPTH`].
    pub fn new(disks: u32) -> Result<Self> {
        Self::between(disks, Peg::A, Peg::B, Peg::C)
    }

    /// Moves for `disks` disks from `from` to `to` through `via`.
    pub fn between(disks: u32, from: Peg, via: Peg, to: Peg) -> Result<Self> {
        check_distinct(from, via, to)?;
        check_depth(disks)?;
        Ok(Self::subproblem(disks, from, via, to))
    }

    fn subproblem(disks: u32, from: Peg, via: Peg, to: Peg) -> Self {
        let phase = match disks {
            0 => Phase::Done,
            1 => Phase::Middle,
            _ => Phase::First(Box::new(Self::subproblem(disks - 1, from, to, via))),
        };
        Self {
            disks,
            from,
            via,
            to,
            phase,
        }
    }
}

impl Iterator for RecursiveMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        match &mut self.phase {
            Phase::First(first) => {
                if let Some(mv) = first.next() {
                    return Some(mv);
                }
                self.phase = Phase::Middle;
                self.next()
            }
            Phase::Middle => {
                self.phase = if self.disks > 1 {
                    Phase::Second(Box::new(Self::subproblem(
                        self.disks - 1,
                        self.via,
                        self.from,
                        self.to,
                    )))
                } else {
                    Phase::Done
                };
                Some(Move::new(self.from, self.to))
            }
            Phase::Second(second) => {
                let mv = second.next();
                if mv.is_none() {
                    self.phase = Phase::Done;
                }
                mv
            }
            Phase::Done => None,
        }
    }
}

impl std::iter::FusedIterator for RecursiveMoves {}

/// Pending sub-problem on the iterative generator's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub disks: u32,
    pub from: Peg,
    pub via: Peg,
    pub to: Peg,
}

/// Lazy generator driven by an explicit stack of [`WorkItem`]s.
///
/// The stack never holds more than `2 * disks - 1` items.
#[derive(Debug, Clone)]
pub struct IterativeMoves {
    stack: Vec<WorkItem>,
}

impl IterativeMoves {
    /// Moves for `disks` disks from peg A to peg C through peg B.
    pub fn new(disks: u32) -> Self {
        Self::start(disks, Peg::A, Peg::B, Peg::C)
    }

    /// Moves for `disks` disks from `from` to `to` through `via`.
    pub fn between(disks: u32, from: Peg, via: Peg, to: Peg) -> Result<Self> {
        check_distinct(from, via, to)?;
        Ok(Self::start(disks, from, via, to))
    }

    fn start(disks: u32, from: Peg, via: Peg, to: Peg) -> Self {
        let mut stack = Vec::with_capacity(2 * disks as usize);
        if disks > 0 {
            stack.push(WorkItem {
                disks,
                from,
                via,
                to,
            });
        }
        Self { stack }
    }

    /// Sub-problems still waiting on the stack
    pub fn pending(&self) -> &[WorkItem] {
        &self.stack
    }
}

impl Iterator for IterativeMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(item) = self.stack.pop() {
            if item.disks == 1 {
                return Some(Move::new(item.from, item.to));
            }
            // LIFO: push the second half first so the first half pops next
            self.stack.push(WorkItem {
                disks: item.disks - 1,
                from: item.via,
                via: item.from,
                to: item.to,
            });
            self.stack.push(WorkItem {
                disks: 1,
                from: item.from,
                via: item.via,
                to: item.to,
            });
            self.stack.push(WorkItem {
                disks: item.disks - 1,
                from: item.from,
                via: item.to,
                to: item.via,
            });
        }
        None
    }
}

impl std::iter::FusedIterator for IterativeMoves {}

/// Either generator, selected at runtime
#[derive(Debug, Clone)]
pub enum Moves {
    Recursive(RecursiveMoves),
    Iterative(IterativeMoves),
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        match self {
            Moves::Recursive(moves) => moves.next(),
            Moves::Iterative(moves) => moves.next(),
        }
    }
}

impl std::iter::FusedIterator for Moves {}

/// Lazily generate the moves for `disks` disks from A to C with `strategy`.
///
/// A recursive request above [`MAX_RECURSIVE_DEPTH`] is served by the
/// iterative generator instead.
pub fn generate(disks: u32, strategy: Strategy) -> Moves {
    log::debug!("generating moves for {} disks ({})", disks, strategy);
    match strategy {
        Strategy::Recursive => match RecursiveMoves::new(disks) {
            Ok(moves) => Moves::Recursive(moves),
            Err(e) => {
                log::warn!("{}; falling back to the iterative generator", e);
                Moves::Iterative(IterativeMoves::new(disks))
            }
        },
        Strategy::Iterative => Moves::Iterative(IterativeMoves::new(disks)),
    }
}

/// Generate every move into memory, refusing counts above the configured
/// visual limit.
pub fn collect_moves(disks: u32, strategy: Strategy, config: &HanoiConfig) -> Result<Vec<Move>> {
    config.check_limit(disks, Operation::Materialize)?;
    Ok(generate(disks, strategy).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: Peg, to: Peg) -> Move {
        Move::new(from, to)
    }

    #[test]
    fn test_zero_disks_is_empty() {
        assert_eq!(RecursiveMoves::new(0).unwrap().count(), 0);
        assert_eq!(IterativeMoves::new(0).count(), 0);
    }

    #[test]
    fn test_three_disks_sequence() {
        let expected = vec![
            mv(Peg::A, Peg::C),
            mv(Peg::A, Peg::B),
            mv(Peg::C, Peg::B),
            mv(Peg::A, Peg::C),
            mv(Peg::B, Peg::A),
            mv(Peg::B, Peg::C),
            mv(Peg::A, Peg::C),
        ];
        assert_eq!(RecursiveMoves::new(3).unwrap().collect::<Vec<_>>(), expected);
        assert_eq!(IterativeMoves::new(3).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_visit_recursive_matches_iterator() {
        let mut visited = Vec::new();
        visit_recursive(6, Peg::A, Peg::B, Peg::C, &mut |m| visited.push(m));
        assert_eq!(visited, RecursiveMoves::new(6).unwrap().collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_pegs() {
        let moves: Vec<_> = IterativeMoves::between(2, Peg::C, Peg::A, Peg::B)
            .unwrap()
            .collect();
        assert_eq!(
            moves,
            vec![mv(Peg::C, Peg::A), mv(Peg::C, Peg::B), mv(Peg::A, Peg::B)]
        );
        let recursive: Vec<_> = RecursiveMoves::between(2, Peg::C, Peg::A, Peg::B)
            .unwrap()
            .collect();
        assert_eq!(recursive, moves);
    }

    #[test]
    fn test_duplicate_pegs_rejected() {
        assert_eq!(
            RecursiveMoves::between(3, Peg::A, Peg::A, Peg::C).unwrap_err(),
            HanoiError::DuplicatePeg {
                from: Peg::A,
                via: Peg::A,
                to: Peg::C
            }
        );
        assert!(IterativeMoves::between(3, Peg::B, Peg::C, Peg::B).is_err());
    }

    #[test]
    fn test_stack_depth_is_linear() {
        for disks in 1..=12 {
            let mut moves = IterativeMoves::new(disks);
            let mut deepest = moves.pending().len();
            while moves.next().is_some() {
                deepest = deepest.max(moves.pending().len());
            }
            assert!(
                deepest <= 2 * disks as usize - 1,
                "stack reached {} for {} disks",
                deepest,
                disks
            );
        }
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut moves = RecursiveMoves::new(2).unwrap();
        assert_eq!(moves.by_ref().count(), 3);
        assert_eq!(moves.next(), None);
        assert_eq!(moves.next(), None);
    }

    #[test]
    fn test_recursive_depth_limit() {
        let mut deepest = RecursiveMoves::new(MAX_RECURSIVE_DEPTH).unwrap();
        assert_eq!(deepest.next(), Some(mv(Peg::A, Peg::B)));
        drop(deepest);

        assert_eq!(
            RecursiveMoves::new(MAX_RECURSIVE_DEPTH + 1).unwrap_err(),
            HanoiError::ResourceLimitExceeded {
                requested: MAX_RECURSIVE_DEPTH + 1,
                limit: MAX_RECURSIVE_DEPTH,
                operation: Operation::Recursion,
            }
        );
        assert!(RecursiveMoves::between(20_000, Peg::B, Peg::A, Peg::C).is_err());
    }

    #[test]
    fn test_generate_falls_back_to_iterative_when_too_deep() {
        let mut moves = generate(20_000, Strategy::Recursive);
        assert!(matches!(moves, Moves::Iterative(_)));
        assert_eq!(moves.next(), Some(mv(Peg::A, Peg::B)));
        assert!(matches!(
            generate(MAX_RECURSIVE_DEPTH, Strategy::Recursive),
            Moves::Recursive(_)
        ));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("recursive".parse::<Strategy>(), Ok(Strategy::Recursive));
        assert_eq!("Iter".parse::<Strategy>(), Ok(Strategy::Iterative));
        assert!("bogus".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Recursive.to_string(), "recursive");
    }

    #[test]
    fn test_collect_moves_limit() {
        let config = HanoiConfig {
            max_visual_n: 4,
            ..HanoiConfig::default()
        };
        assert_eq!(
            collect_moves(4, Strategy::Recursive, &config).unwrap().len(),
            15
        );
        assert!(matches!(
            collect_moves(5, Strategy::Iterative, &config),
            Err(HanoiError::ResourceLimitExceeded {
                requested: 5,
                limit: 4,
                operation: Operation::Materialize,
            })
        ));
    }
}
