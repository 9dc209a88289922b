//! Fleet placement: legality checks and randomized layout generation.

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::Ship;
use rand::Rng;

/// Places one side's fleet, tracking how much of the manifest has been
/// committed. The board is passed per call so the placer never holds a
/// borrow across turns.
pub struct ShipPlacer {
    fleet: Vec<usize>,
    placed: usize,
}

impl ShipPlacer {
    pub fn new() -> Self {
        Self::with_fleet(&FLEET)
    }

    pub fn with_fleet(fleet: &[usize]) -> Self {
        ShipPlacer {
            fleet: fleet.to_vec(),
            placed: 0,
        }
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Length of the next ship awaiting placement.
    pub fn next_length(&self) -> Option<usize> {
        self.fleet.get(self.placed).copied()
    }

    /// True once every manifest entry has been committed.
    pub fn all_placed(&self) -> bool {
        self.placed == self.fleet.len()
    }

    /// Coordinates covered by a ship starting at (`row`, `col`), extending
    /// along columns when `horizontal`, else along rows.
    pub fn coordinates_for(
        row: usize,
        col: usize,
        length: usize,
        horizontal: bool,
    ) -> Vec<(usize, usize)> {
        (0..length)
            .map(|i| if horizontal { (row, col + i) } else { (row + i, col) })
            .collect()
    }

    /// A placement is legal when every candidate cell is on the board,
    /// unoccupied, and has no orthogonally adjacent occupied cell. The
    /// one-cell buffer means ships may touch diagonally but never
    /// edge-to-edge.
    pub fn is_valid_placement(&self, board: &Board, coordinates: &[(usize, usize)]) -> bool {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        coordinates.iter().all(|&(row, col)| {
            match board.cell(row, col) {
                None | Some(CellState::Ship) => return false,
                _ => {}
            }
            OFFSETS.iter().all(|&(dr, dc)| {
                let (nr, nc) = (row as isize + dr, col as isize + dc);
                if nr < 0 || nc < 0 {
                    return true;
                }
                board.cell(nr as usize, nc as usize) != Some(CellState::Ship)
            })
        })
    }

    /// Commit the next fleet ship at the given coordinates. This is the
    /// commit step of the placement-input contract; callers validate through
    /// `is_valid_placement` first, and the commit re-checks before touching
    /// the board.
    pub fn place_next(
        &mut self,
        board: &mut Board,
        coordinates: &[(usize, usize)],
    ) -> Result<usize, BoardError> {
        let length = self.next_length().ok_or(BoardError::FleetComplete)?;
        if !self.is_valid_placement(board, coordinates) {
            return Err(BoardError::InvalidPlacement);
        }
        let index = board.place_ship(Ship::new(length), coordinates)?;
        self.placed += 1;
        Ok(index)
    }

    /// Randomly place every remaining fleet ship: sample an orientation and
    /// a legal starting coordinate until validation passes. Each ship gets a
    /// bounded number of samples; exhausting them means the fleet cannot fit
    /// the board.
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), BoardError> {
        while let Some(length) = self.next_length() {
            let size = board.size();
            if length > size {
                return Err(BoardError::PlacementExhausted);
            }
            let mut attempts = 0;
            loop {
                if attempts >= MAX_PLACEMENT_ATTEMPTS {
                    return Err(BoardError::PlacementExhausted);
                }
                attempts += 1;

                let horizontal = rng.random::<bool>();
                let (max_row, max_col) = if horizontal {
                    (size, size - length + 1)
                } else {
                    (size - length + 1, size)
                };
                let row = rng.random_range(0..max_row);
                let col = rng.random_range(0..max_col);

                let coordinates = Self::coordinates_for(row, col, length, horizontal);
                if self.is_valid_placement(board, &coordinates) {
                    board.place_ship(Ship::new(length), &coordinates)?;
                    self.placed += 1;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new()
    }
}
