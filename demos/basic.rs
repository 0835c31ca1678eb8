//! Basic example of using the Hanoi engine

use hanoi_core::{
    collect_moves, compare_timings, count_moves, log10_moves, replay, HanoiConfig, Peg, Strategy,
};

fn main() {
    let config = HanoiConfig::default();

    // Closed form
    for disks in [3, 10, 64] {
        match count_moves(disks) {
            Ok(moves) => println!("{} disks: {} moves (10^{:.2})", disks, moves, log10_moves(disks)),
            Err(e) => println!("{} disks: {}", disks, e),
        }
    }

    // Both generators agree
    let recursive = collect_moves(4, Strategy::Recursive, &config).unwrap();
    let iterative = collect_moves(4, Strategy::Iterative, &config).unwrap();
    println!("\nRecursive and iterative agree for 4 disks: {}", recursive == iterative);
    for (i, mv) in recursive.iter().enumerate() {
        println!("{:>3}. {}", i + 1, mv);
    }

    // Replay
    println!("\nReplaying 3 disks:");
    let mut run = replay(3, Strategy::Iterative, &config).unwrap();
    println!("{}", run.current());
    while let Some(step) = run.advance().unwrap() {
        println!("move {}: disk {} {}", step.number, step.disk, step.mv);
        println!("{}", run.current());
    }
    println!("Solved on C: {}", run.current().is_solved_on(Peg::C));

    // Materializing above the limit is refused
    if let Err(e) = collect_moves(20, Strategy::Iterative, &config) {
        println!("\n{}", e);
    }

    // Timing
    println!("\n  n   recursive(s)   iterative(s)");
    for sample in compare_timings(16, &config) {
        println!(
            "{:>3}   {:>12.6}   {:>12.6}",
            sample.disks, sample.recursive_secs, sample.iterative_secs
        );
    }
}
