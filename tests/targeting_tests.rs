use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seastrike::{AttackOutcome, Board, Ship, ShipPlacer, TargetingAi};

/// 10x10 board with a single length-5 ship on row 9, columns 2..=6.
fn board_with_row9_ship() -> (Board, usize) {
    let mut board = Board::new(10);
    let coordinates: Vec<_> = (2..=6).map(|col| (9, col)).collect();
    let index = board.place_ship(Ship::new(5), &coordinates).unwrap();
    (board, index)
}

#[test]
fn infers_forward_direction_from_two_hits() {
    let (mut board, index) = board_with_row9_ship();
    let mut ai = TargetingAi::new();

    board.attack(9, 4).unwrap();
    ai.record_outcome(&board, (9, 4));
    assert_eq!(ai.last_hit(), Some((9, 4)));
    assert_eq!(ai.active_ship(), Some(index));
    assert_eq!(ai.pending_target(), None);

    board.attack(9, 5).unwrap();
    ai.record_outcome(&board, (9, 5));
    assert_eq!(ai.pending_target(), Some((9, 6)));

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(ai.select_target(&mut rng, &board), (9, 6));
    assert_eq!(ai.pending_target(), None);
}

#[test]
fn falls_back_to_backward_probe_when_forward_is_blocked() {
    let (mut board, _) = board_with_row9_ship();
    let mut ai = TargetingAi::new();
    let mut rng = SmallRng::seed_from_u64(3);

    board.attack(9, 5).unwrap();
    ai.record_outcome(&board, (9, 5));
    board.attack(9, 6).unwrap();
    ai.record_outcome(&board, (9, 6));
    assert_eq!(ai.pending_target(), Some((9, 7)));

    // the forward probe turns out to be open water
    assert_eq!(ai.select_target(&mut rng, &board), (9, 7));
    assert_eq!(board.attack(9, 7).unwrap(), AttackOutcome::Miss);
    ai.record_outcome(&board, (9, 7));

    assert_eq!(ai.pending_target(), Some((9, 4)));
    assert_eq!(ai.last_hit(), None);
}

#[test]
fn adjacent_probe_stays_in_bounds_and_unattempted() {
    let mut board = Board::new(10);
    board.place_ship(Ship::new(2), &[(0, 0), (0, 1)]).unwrap();
    let mut ai = TargetingAi::new();
    board.attack(0, 0).unwrap();
    ai.record_outcome(&board, (0, 0));

    // corner hit: only (0, 1) and (1, 0) qualify
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = ai.select_target(&mut rng, &board);
        assert!(target == (0, 1) || target == (1, 0), "bad probe {target:?}");
    }
}

#[test]
fn clears_state_once_the_pursued_ship_sinks() {
    let mut board = Board::new(10);
    let index = board.place_ship(Ship::new(2), &[(5, 5), (5, 6)]).unwrap();
    let mut ai = TargetingAi::new();

    board.attack(5, 5).unwrap();
    ai.record_outcome(&board, (5, 5));
    assert_eq!(ai.active_ship(), Some(index));

    assert_eq!(board.attack(5, 6).unwrap(), AttackOutcome::Sunk(index));
    ai.record_outcome(&board, (5, 6));
    assert_eq!(ai.last_hit(), None);
    assert_eq!(ai.pending_target(), None);
    assert_eq!(ai.active_ship(), None);
}

#[test]
fn hunt_only_offers_unattempted_cells() {
    let mut board = Board::new(3);
    // attack everything except (2, 2)
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) != (2, 2) {
                board.attack(row, col).unwrap();
            }
        }
    }
    let mut ai = TargetingAi::new();
    let mut rng = SmallRng::seed_from_u64(9);
    assert_eq!(ai.select_target(&mut rng, &board), (2, 2));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Against any random legal fleet the AI sinks everything without ever
    /// repeating a coordinate, within one full board sweep.
    #[test]
    fn ai_always_finishes_a_random_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10);
        let mut placer = ShipPlacer::new();
        placer.place_randomly(&mut rng, &mut board).unwrap();

        let mut ai = TargetingAi::new();
        let mut moves = 0;
        while !board.all_sunk() {
            let (row, col) = ai.select_target(&mut rng, &board);
            // a repeated coordinate would error here
            board.attack(row, col).unwrap();
            ai.record_outcome(&board, (row, col));
            moves += 1;
            prop_assert!(moves <= 100, "AI did not finish within one board sweep");
        }
    }
}
