//! Step counting.
//!
//! The closed form `2^n - 1` gives the exact move total. The two counting
//! traversals walk the same branching structure as the generators without
//! building any [`Move`](crate::Move) values; the timing harness uses them.

use crate::config::HanoiConfig;
use crate::error::{HanoiError, Result};
use serde::{Deserialize, Serialize};

/// Largest disk count whose move total fits in a `u128`
pub const MAX_DISKS: u32 = 127;

/// Exact number of moves for `disks` disks: `2^disks - 1`.
pub fn count_moves(disks: u32) -> Result<u128> {
    if disks > MAX_DISKS {
        return Err(HanoiError::InvalidDiskCount {
            requested: disks.to_string(),
            max: MAX_DISKS,
        });
    }
    Ok((1u128 << disks) - 1)
}

/// `log10` of the move total, for disk counts too large to print exactly.
pub fn log10_moves(disks: u32) -> f64 {
    // log10(2^n - 1) and n * log10(2) agree to display precision for n >= 1
    f64::from(disks) * std::f64::consts::LOG10_2
}

/// Parse a user-supplied disk count, rejecting negatives and counts above
/// [`MAX_DISKS`].
pub fn parse_disk_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let invalid = || HanoiError::InvalidDiskCount {
        requested: trimmed.to_string(),
        max: MAX_DISKS,
    };
    let value: i64 = trimmed.parse().map_err(|_| invalid())?;
    if !(0..=i64::from(MAX_DISKS)).contains(&value) {
        return Err(invalid());
    }
    Ok(value as u32)
}

/// Count moves by recursing like the recursive generator.
///
/// Visits every move, so it is only practical for small counts. The total
/// fits in a `u64` up to 64 disks; callers cap it at
/// [`MAX_TIMING_DISKS`](crate::config::MAX_TIMING_DISKS).
pub fn count_recursive(disks: u32) -> u64 {
    match disks {
        0 => 0,
        1 => 1,
        _ => count_recursive(disks - 1) + 1 + count_recursive(disks - 1),
    }
}

/// Count moves with the iterative generator's explicit stack.
///
/// Same range as [`count_recursive`].
pub fn count_iterative(disks: u32) -> u64 {
    if disks == 0 {
        return 0;
    }
    let mut stack = vec![disks];
    let mut count = 0;
    while let Some(k) = stack.pop() {
        if k == 1 {
            count += 1;
        } else {
            stack.push(k - 1);
            stack.push(1);
            stack.push(k - 1);
        }
    }
    count
}

/// One point on the growth curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub disks: u32,
    pub log10_moves: f64,
}

/// `log10(2^k)` for k in `1..=min(disks, max_growth_n)`.
pub fn growth_curve(disks: u32, config: &HanoiConfig) -> Vec<GrowthPoint> {
    let upper = disks.min(config.max_growth_n);
    (1..=upper)
        .map(|k| GrowthPoint {
            disks: k,
            log10_moves: log10_moves(k),
        })
        .collect()
}

/// Everything known about a disk count without generating moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub disks: u32,
    pub formula: String,
    /// Exact total, absent when it does not fit in a `u128`
    pub moves: Option<u128>,
    pub log10_moves: f64,
}

impl Summary {
    pub fn for_disks(disks: u32) -> Self {
        Self {
            disks,
            formula: "2^n - 1".to_string(),
            moves: count_moves(disks).ok(),
            log10_moves: log10_moves(disks),
        }
    }
}
