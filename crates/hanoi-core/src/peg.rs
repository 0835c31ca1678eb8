use serde::{Deserialize, Serialize};

/// Disk identifier; the value is also its size (1 = smallest)
pub type Disk = u32;

/// One of the three pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs in index order
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Index of this peg (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Peg for an index, if it is in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The peg that is neither `a` nor `b`, or `None` when they are equal.
    pub fn other(a: Peg, b: Peg) -> Option<Peg> {
        if a == b {
            return None;
        }
        // Indices sum to 3 across all pegs
        Self::from_index(3 - a.index() - b.index())
    }

    /// Display label ("A", "B" or "C")
    pub fn label(self) -> &'static str {
        match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relocation of the top disk of `from` onto `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
