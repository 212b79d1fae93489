use std::collections::HashSet;

use broadside::{Board, Coord, ShotResult, Targeting, BOARD_SIZE, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Let the targeting sink a randomly placed fleet; returns every shot fired.
fn hunt(seed: u64) -> (Board, Vec<(Coord, ShotResult)>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    let mut ai = Targeting::new();

    let mut shots = Vec::new();
    while !board.all_sunk() {
        let coord = ai.next_shot(&mut rng).expect("fleet sunk before cells ran out");
        let result = board.shoot(coord).unwrap();
        ai.on_result(coord, result);
        shots.push((coord, result));
        if result.is_hit() && result.sunk_ship().is_some() {
            assert!(ai.queue().is_empty());
            assert!(ai.chain().is_empty());
        }
    }
    (board, shots)
}

#[test]
fn test_ai_sinks_fleet() {
    let (board, shots) = hunt(123);
    assert!(board.all_sunk());
    assert!(shots.len() <= BOARD_SIZE * BOARD_SIZE);
    let hits = shots.iter().filter(|(_, r)| r.is_hit()).count();
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    let sinks: Vec<_> = shots.iter().filter_map(|(_, r)| r.sunk_ship()).collect();
    assert_eq!(sinks.len(), 5);
}

#[test]
fn test_ai_beats_a_full_sweep_on_average() {
    let total: usize = (0..20).map(|seed| hunt(seed).1.len()).sum();
    // hunting on the checkerboard plus line following sinks a fleet well
    // before sweeping the whole grid
    assert!(total / 20 < 80, "mean shots {}", total / 20);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ai_never_repeats_or_hits_already(seed in any::<u64>()) {
        let (_, shots) = hunt(seed);
        let mut seen = HashSet::new();
        for (coord, result) in shots {
            prop_assert!(seen.insert(coord));
            prop_assert_ne!(result, ShotResult::Already);
        }
    }
}
