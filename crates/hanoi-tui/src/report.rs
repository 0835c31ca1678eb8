//! Plain-text and JSON output for the non-interactive subcommands

use hanoi_core::{GrowthPoint, Move, Summary, TimingSample};
use serde::Serialize;
use std::fmt::Write;

/// Pretty JSON for any report payload
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Disks:       {}", summary.disks);
    let _ = writeln!(out, "T(n):        {}", summary.formula);
    match summary.moves {
        Some(moves) => {
            let _ = writeln!(out, "Moves:       {}", moves);
        }
        None => {
            let _ = writeln!(out, "Moves:       too large to print exactly");
        }
    }
    let _ = writeln!(out, "Magnitude:   10^{:.2}", summary.log10_moves);
    out
}

/// Cross-check of the closed form against both counting traversals
pub fn format_cross_check(disks: u32, recursive: u64, iterative: u64) -> String {
    let verdict = if recursive == iterative { "agree" } else { "DISAGREE" };
    format!(
        "Counted:     recursive {}, iterative {} ({}) for n = {}\n",
        recursive, iterative, verdict, disks
    )
}

/// Single-n timing of both strategies, with their ratio when measurable
pub fn format_timing_sample(sample: &TimingSample) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recursive:   {:.6} s", sample.recursive_secs);
    let _ = writeln!(out, "Iterative:   {:.6} s", sample.iterative_secs);
    if let Some(ratio) = sample.ratio() {
        let _ = writeln!(out, "Ratio:       {:.2}x (iterative / recursive)", ratio);
    }
    out
}

pub fn format_moves(moves: &[Move]) -> String {
    let width = moves.len().to_string().len();
    let mut out = String::new();
    for (i, mv) in moves.iter().enumerate() {
        let _ = writeln!(out, "{:>width$}. {}", i + 1, mv, width = width);
    }
    out
}

pub fn format_timings(samples: &[TimingSample]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:>14}  {:>14}", "n", "recursive (s)", "iterative (s)");
    for sample in samples {
        let _ = writeln!(
            out,
            "{:>4}  {:>14.6}  {:>14.6}",
            sample.disks, sample.recursive_secs, sample.iterative_secs
        );
    }
    out
}

/// Growth table with a proportional bar, standing in for a chart
pub fn format_growth(points: &[GrowthPoint]) -> String {
    const BAR_WIDTH: f64 = 50.0;
    let max = points
        .iter()
        .map(|p| p.log10_moves)
        .fold(0.0_f64, f64::max);
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:>10}", "n", "log10(2^n)");
    for point in points {
        let bar = if max > 0.0 {
            (point.log10_moves / max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:>4}  {:>10.3}  {}",
            point.disks,
            point.log10_moves,
            "#".repeat(bar)
        );
    }
    out
}
