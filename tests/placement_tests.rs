use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seastrike::{Board, BoardError, CellState, ShipPlacer, FLEET};

#[test]
fn coordinates_extend_along_the_chosen_axis() {
    assert_eq!(
        ShipPlacer::coordinates_for(2, 3, 3, true),
        vec![(2, 3), (2, 4), (2, 5)]
    );
    assert_eq!(
        ShipPlacer::coordinates_for(2, 3, 3, false),
        vec![(2, 3), (3, 3), (4, 3)]
    );
}

#[test]
fn rejects_out_of_bounds_and_overlapping_candidates() {
    let mut board = Board::new(10);
    let mut placer = ShipPlacer::with_fleet(&[3, 3]);
    placer
        .place_next(&mut board, &[(0, 0), (0, 1), (0, 2)])
        .unwrap();

    assert!(!placer.is_valid_placement(&board, &[(9, 8), (9, 9), (9, 10)]));
    assert!(!placer.is_valid_placement(&board, &[(0, 0), (1, 0), (2, 0)]));
}

#[test]
fn one_cell_buffer_is_mandatory() {
    let mut board = Board::new(10);
    let mut placer = ShipPlacer::with_fleet(&[3, 3, 3]);
    placer
        .place_next(&mut board, &[(5, 2), (5, 3), (5, 4)])
        .unwrap();

    // edge-to-edge contact is illegal
    assert!(!placer.is_valid_placement(&board, &[(4, 2), (4, 3), (4, 4)]));
    // even a single touching cell invalidates the whole candidate
    assert!(!placer.is_valid_placement(&board, &[(6, 4), (7, 4), (8, 4)]));
    // one empty row between the ships is fine
    assert!(placer.is_valid_placement(&board, &[(7, 2), (7, 3), (7, 4)]));
    // diagonal-only adjacency is fine too
    assert!(placer.is_valid_placement(&board, &[(6, 5), (6, 6), (6, 7)]));
}

#[test]
fn place_next_walks_the_manifest() {
    let mut board = Board::new(10);
    let mut placer = ShipPlacer::with_fleet(&[2, 2]);
    assert_eq!(placer.next_length(), Some(2));

    placer.place_next(&mut board, &[(0, 0), (0, 1)]).unwrap();
    assert!(!placer.all_placed());
    placer.place_next(&mut board, &[(2, 0), (2, 1)]).unwrap();
    assert!(placer.all_placed());

    assert_eq!(
        placer.place_next(&mut board, &[(4, 0), (4, 1)]).unwrap_err(),
        BoardError::FleetComplete
    );
}

#[test]
fn place_next_rejects_illegal_coordinates() {
    let mut board = Board::new(10);
    let mut placer = ShipPlacer::with_fleet(&[2, 2]);
    placer.place_next(&mut board, &[(0, 0), (0, 1)]).unwrap();

    assert_eq!(
        placer.place_next(&mut board, &[(1, 0), (1, 1)]).unwrap_err(),
        BoardError::InvalidPlacement
    );
    assert_eq!(board.ship_count(), 1);
}

#[test]
fn random_placement_fills_the_default_fleet() {
    let mut board = Board::new(10);
    let mut placer = ShipPlacer::new();
    let mut rng = SmallRng::seed_from_u64(42);
    placer.place_randomly(&mut rng, &mut board).unwrap();

    assert!(placer.all_placed());
    assert_eq!(board.ship_count(), FLEET.len());
    let ship_cells = board
        .cell_states()
        .iter()
        .flatten()
        .filter(|&&state| state == CellState::Ship)
        .count();
    assert_eq!(ship_cells, FLEET.iter().sum::<usize>());
}

#[test]
fn random_placement_fails_when_the_fleet_cannot_fit() {
    // three length-3 ships with mandatory gaps cannot fit a 4x4 board
    let mut board = Board::new(4);
    let mut placer = ShipPlacer::with_fleet(&[3, 3, 3]);
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        placer.place_randomly(&mut rng, &mut board).unwrap_err(),
        BoardError::PlacementExhausted
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random layouts always produce legal, buffered fleets: no orthogonal
    /// neighbour of a ship cell belongs to a different ship.
    #[test]
    fn random_layouts_keep_ships_apart(seed in any::<u64>()) {
        let mut board = Board::new(10);
        let mut placer = ShipPlacer::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        placer.place_randomly(&mut rng, &mut board).unwrap();

        for row in 0..10usize {
            for col in 0..10usize {
                let Some(here) = board.ship_index_at(row, col) else {
                    continue;
                };
                for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                    let (nr, nc) = (row as isize + dr, col as isize + dc);
                    if nr < 0 || nc < 0 || nr >= 10 || nc >= 10 {
                        continue;
                    }
                    if let Some(other) = board.ship_index_at(nr as usize, nc as usize) {
                        prop_assert_eq!(other, here);
                    }
                }
            }
        }
    }
}
