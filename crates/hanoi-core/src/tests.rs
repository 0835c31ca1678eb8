//! Properties that span the generators, the counter and the tower engine

use crate::{
    collect_moves, count_moves, generate, replay, HanoiConfig, HanoiError, IterativeMoves, Move,
    Operation, Peg, RecursiveMoves, Strategy, Towers,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_generators_are_equivalent() {
    for disks in 1..=20 {
        let recursive = RecursiveMoves::new(disks).unwrap();
        let iterative = IterativeMoves::new(disks);
        let mut compared = 0u64;
        for (index, (r, i)) in recursive.zip(iterative).enumerate() {
            assert_eq!(r, i, "n={} differs at move {}", disks, index + 1);
            compared += 1;
        }
        assert_eq!(compared as u128, count_moves(disks).unwrap());
    }
}

#[test]
fn test_equivalence_on_every_peg_arrangement() {
    for from in Peg::ALL {
        for to in Peg::ALL {
            let Some(via) = Peg::other(from, to) else {
                continue;
            };
            let recursive: Vec<Move> = RecursiveMoves::between(7, from, via, to).unwrap().collect();
            let iterative: Vec<Move> = IterativeMoves::between(7, from, via, to).unwrap().collect();
            assert_eq!(recursive, iterative, "{} -> {} via {}", from, to, via);
        }
    }
}

#[test]
fn test_count_law() {
    for disks in 1..=16 {
        let expected = count_moves(disks).unwrap();
        for &strategy in Strategy::all() {
            assert_eq!(generate(disks, strategy).count() as u128, expected);
        }
        assert_eq!(expected, (1u128 << disks) - 1);
    }
}

#[test]
fn test_monotonic_growth() {
    for disks in 1..127 {
        assert_eq!(
            count_moves(disks + 1).unwrap(),
            2 * count_moves(disks).unwrap() + 1
        );
    }
}

#[test]
fn test_generated_moves_are_legal_and_conserve_disks() {
    for disks in 1..=15 {
        for &strategy in Strategy::all() {
            let mut towers = Towers::new(disks);
            for mv in generate(disks, strategy) {
                if let Err(e) = towers.apply(mv) {
                    panic!("{} generator, n={}: {}", strategy, disks, e);
                }
            }
            assert!(towers.peg(Peg::A).is_empty());
            assert!(towers.peg(Peg::B).is_empty());
            let expected: Vec<u32> = (1..=disks).rev().collect();
            assert_eq!(towers.peg(Peg::C), expected.as_slice());
        }
    }
}

#[test]
fn test_every_snapshot_is_consistent() {
    let config = HanoiConfig::default();
    for disks in 1..=8 {
        let run = replay(disks, Strategy::Recursive, &config).unwrap();
        let mut snapshots = 0u128;
        for snapshot in run {
            let towers = snapshot.unwrap();
            assert!(towers.is_consistent());
            snapshots += 1;
        }
        assert_eq!(snapshots, count_moves(disks).unwrap() + 1);
    }
}

#[test]
fn test_base_cases() {
    assert_eq!(
        RecursiveMoves::new(1).unwrap().collect::<Vec<_>>(),
        vec![Move::new(Peg::A, Peg::C)]
    );
    let two = vec![
        Move::new(Peg::A, Peg::B),
        Move::new(Peg::A, Peg::C),
        Move::new(Peg::B, Peg::C),
    ];
    assert_eq!(RecursiveMoves::new(2).unwrap().collect::<Vec<_>>(), two);
    assert_eq!(IterativeMoves::new(2).collect::<Vec<_>>(), two);
}

#[test]
fn test_idempotent_initialization() {
    for disks in 0..=12 {
        assert_eq!(Towers::new(disks), Towers::new(disks));
    }
}

#[test]
fn test_resource_boundary() {
    let config = HanoiConfig::default();
    let limit = config.max_visual_n;
    assert!(collect_moves(limit, Strategy::Iterative, &config).is_ok());
    for &strategy in Strategy::all() {
        assert_eq!(
            collect_moves(limit + 1, strategy, &config).unwrap_err(),
            HanoiError::ResourceLimitExceeded {
                requested: limit + 1,
                limit,
                operation: Operation::Materialize,
            }
        );
        assert!(replay(30, strategy, &config).is_err());
    }
}

#[test]
fn test_random_moves_never_break_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    for disks in 1..=6 {
        let mut towers = Towers::new(disks);
        for _ in 0..500 {
            let from = Peg::ALL[rng.gen_range(0..3)];
            let to = Peg::ALL[rng.gen_range(0..3)];
            let before = towers.clone();
            match towers.apply(Move::new(from, to)) {
                Ok(disk) => {
                    assert_eq!(towers.top(to), Some(disk));
                    assert_eq!(before.top(from), Some(disk));
                }
                Err(_) => assert_eq!(towers, before),
            }
            assert!(towers.is_consistent());
        }
    }
}
