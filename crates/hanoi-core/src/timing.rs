//! Wall-clock comparison of the recursive and iterative counting traversals.
//!
//! Both traversals are exponential, so every entry point is bounded by
//! [`HanoiConfig::timing_limit`]. Durations come from [`Instant`], which is
//! monotonic.

use crate::config::HanoiConfig;
use crate::counter::{count_iterative, count_recursive};
use crate::error::{Operation, Result};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Elapsed time of both strategies at one disk count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub disks: u32,
    pub recursive_secs: f64,
    pub iterative_secs: f64,
}

impl TimingSample {
    /// Iterative time divided by recursive time, if the recursive run was measurable
    pub fn ratio(&self) -> Option<f64> {
        (self.recursive_secs > 0.0).then(|| self.iterative_secs / self.recursive_secs)
    }
}

fn measure(disks: u32, count: fn(u32) -> u64) -> Duration {
    let start = Instant::now();
    black_box(count(black_box(disks)));
    start.elapsed()
}

fn sample(disks: u32) -> TimingSample {
    // Separate runs; neither traversal keeps state between calls
    let recursive = measure(disks, count_recursive);
    let iterative = measure(disks, count_iterative);
    TimingSample {
        disks,
        recursive_secs: recursive.as_secs_f64(),
        iterative_secs: iterative.as_secs_f64(),
    }
}

/// Time both strategies at exactly `disks`.
pub fn time_strategies(disks: u32, config: &HanoiConfig) -> Result<TimingSample> {
    config.check_limit(disks, Operation::Timing)?;
    Ok(sample(disks))
}

/// Time both strategies for every k in `1..=min(disks, timing_limit)`.
pub fn compare_timings(disks: u32, config: &HanoiConfig) -> Vec<TimingSample> {
    let upper = disks.min(config.timing_limit());
    if upper < disks {
        log::info!(
            "timing sweep capped at {} disks ({} requested)",
            upper,
            disks
        );
    }
    log::debug!("timing sweep over 1..={}", upper);
    (1..=upper).map(sample).collect()
}
