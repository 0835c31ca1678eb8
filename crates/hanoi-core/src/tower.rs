use crate::error::{HanoiError, IllegalMoveReason, Result};
use crate::peg::{Disk, Move, Peg};
use serde::{Deserialize, Serialize};

/// Disks on all three pegs at one instant.
///
/// Each peg is a stack with its top at the end of the `Vec`. Sizes strictly
/// decrease from bottom to top, and the disk total never changes after
/// construction. [`Towers::apply`] is the only mutation and it refuses
/// anything that would break either rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Towers {
    pegs: [Vec<Disk>; 3],
    disks: u32,
}

impl Towers {
    /// All `disks` disks on peg A, largest at the bottom.
    pub fn new(disks: u32) -> Self {
        Self {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
        }
    }

    /// Total number of disks
    pub fn disk_count(&self) -> u32 {
        self.disks
    }

    /// Disks on `peg`, bottom first
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Topmost disk on `peg`
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Check `mv` against the current state without changing it.
    pub fn check(&self, mv: Move) -> Result<Disk> {
        let illegal = |reason| HanoiError::IllegalMove { mv, reason };
        if mv.from == mv.to {
            return Err(illegal(IllegalMoveReason::SamePeg));
        }
        let disk = self
            .top(mv.from)
            .ok_or_else(|| illegal(IllegalMoveReason::EmptySource))?;
        if let Some(top) = self.top(mv.to) {
            if top < disk {
                return Err(illegal(IllegalMoveReason::LargerOnSmaller { disk, top }));
            }
        }
        Ok(disk)
    }

    /// Move the top disk of `mv.from` onto `mv.to`, returning the disk moved.
    ///
    /// An illegal move is reported and leaves the towers untouched.
    pub fn apply(&mut self, mv: Move) -> Result<Disk> {
        let disk = self.check(mv)?;
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(disk);
        Ok(disk)
    }

    /// Copy of these towers with `mv` applied.
    pub fn applied(&self, mv: Move) -> Result<Self> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// Whether every disk sits on `peg`
    pub fn is_solved_on(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].len() == self.disks as usize
    }

    /// Whether the ordering and conservation rules hold.
    ///
    /// Always true for values built through this API; exposed for tests and
    /// for checking deserialized input.
    pub fn is_consistent(&self) -> bool {
        let ordered = self
            .pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]));
        let mut seen: Vec<Disk> = self.pegs.iter().flatten().copied().collect();
        seen.sort_unstable();
        ordered && seen.iter().copied().eq(1..=self.disks)
    }
}

impl std::fmt::Display for Towers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in Peg::ALL {
            let disks: Vec<String> = self.peg(peg).iter().map(|d| d.to_string()).collect();
            writeln!(f, "{}: [{}]", peg, disks.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let towers = Towers::new(4);
        assert_eq!(towers.peg(Peg::A), &[4, 3, 2, 1]);
        assert!(towers.peg(Peg::B).is_empty());
        assert!(towers.peg(Peg::C).is_empty());
        assert_eq!(towers.top(Peg::A), Some(1));
        assert!(towers.is_solved_on(Peg::A));
        assert!(towers.is_consistent());
    }

    #[test]
    fn test_apply_moves_top_disk() {
        let mut towers = Towers::new(3);
        assert_eq!(towers.apply(Move::new(Peg::A, Peg::C)), Ok(1));
        assert_eq!(towers.apply(Move::new(Peg::A, Peg::B)), Ok(2));
        assert_eq!(towers.peg(Peg::A), &[3]);
        assert_eq!(towers.peg(Peg::B), &[2]);
        assert_eq!(towers.peg(Peg::C), &[1]);
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut towers = Towers::new(2);
        let mv = Move::new(Peg::B, Peg::C);
        assert_eq!(
            towers.apply(mv),
            Err(HanoiError::IllegalMove {
                mv,
                reason: IllegalMoveReason::EmptySource
            })
        );
        assert_eq!(towers, Towers::new(2));
    }

    #[test]
    fn test_larger_on_smaller_rejected() {
        let mut towers = Towers::new(3);
        towers.apply(Move::new(Peg::A, Peg::B)).unwrap();
        let before = towers.clone();
        let mv = Move::new(Peg::A, Peg::B);
        assert_eq!(
            towers.apply(mv),
            Err(HanoiError::IllegalMove {
                mv,
                reason: IllegalMoveReason::LargerOnSmaller { disk: 2, top: 1 }
            })
        );
        assert_eq!(towers, before);
    }

    #[test]
    fn test_same_peg_rejected() {
        let towers = Towers::new(1);
        assert!(matches!(
            towers.check(Move::new(Peg::A, Peg::A)),
            Err(HanoiError::IllegalMove {
                reason: IllegalMoveReason::SamePeg,
                ..
            })
        ));
    }

    #[test]
    fn test_applied_leaves_source_untouched() {
        let towers = Towers::new(2);
        let next = towers.applied(Move::new(Peg::A, Peg::B)).unwrap();
        assert_eq!(towers.peg(Peg::A), &[2, 1]);
        assert_eq!(next.peg(Peg::B), &[1]);
    }

    #[test]
    fn test_zero_disks() {
        let towers = Towers::new(0);
        assert_eq!(towers.disk_count(), 0);
        assert!(towers.is_solved_on(Peg::C));
        assert!(towers.is_consistent());
    }

    #[test]
    fn test_inconsistent_deserialized_state_detected() {
        let bad: Towers =
            serde_json::from_str(r#"{"pegs":[[1,2],[],[]],"disks":2}"#).unwrap();
        assert!(!bad.is_consistent());
        let missing: Towers = serde_json::from_str(r#"{"pegs":[[2],[],[]],"disks":2}"#).unwrap();
        assert!(!missing.is_consistent());
    }

    #[test]
    fn test_display() {
        let towers = Towers::new(2);
        assert_eq!(towers.to_string(), "A: [2 1]\nB: []\nC: []\n");
    }
}
