//! Game board state: cell grid, ship index and attack bookkeeping.

use crate::common::{AttackOutcome, BoardError};
use crate::ship::Ship;
use log::debug;

/// Renderable state of a single cell. UI collaborators map these to visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

/// One side's board. Ships are owned here and addressed by index; every
/// per-cell table is a flat vector indexed `row * size + col`.
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    ship_at: Vec<Option<usize>>,
    attempted: Vec<bool>,
    missed: Vec<(usize, usize)>,
}

impl Board {
    /// Create an empty `size`×`size` board. The size is fixed for the
    /// board's lifetime.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            ships: Vec::new(),
            ship_at: vec![None; size * size],
            attempted: vec![false; size * size],
            missed: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn ship(&self, index: usize) -> &Ship {
        &self.ships[index]
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Index of the ship occupying (`row`, `col`), if any.
    pub fn ship_index_at(&self, row: usize, col: usize) -> Option<usize> {
        if self.in_bounds(row, col) {
            self.ship_at[self.index(row, col)]
        } else {
            None
        }
    }

    /// Whether (`row`, `col`) has been attacked. The attempted set only
    /// grows for the board's lifetime.
    pub fn attempted(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.attempted[self.index(row, col)]
    }

    /// Coordinates of every missed attack, oldest first.
    pub fn missed_hits(&self) -> &[(usize, usize)] {
        &self.missed
    }

    /// Commit a ship to the given coordinates and return its index. The
    /// caller is responsible for legality (adjacency, overlap); the board
    /// only rejects a coordinate count that disagrees with the ship length,
    /// or coordinates it cannot index.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        coordinates: &[(usize, usize)],
    ) -> Result<usize, BoardError> {
        if coordinates.len() != ship.length() {
            return Err(BoardError::LengthMismatch);
        }
        for &(row, col) in coordinates {
            if !self.in_bounds(row, col) {
                return Err(BoardError::OutOfBounds);
            }
        }
        let index = self.ships.len();
        self.ships.push(ship);
        for &(row, col) in coordinates {
            let i = self.index(row, col);
            self.cells[i] = CellState::Ship;
            self.ship_at[i] = Some(index);
        }
        Ok(index)
    }

    /// Apply an attack at (`row`, `col`). A coordinate that was already
    /// attacked is rejected outright rather than silently tolerated, so
    /// callers pre-filter through `attempted`.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds);
        }
        let i = self.index(row, col);
        if self.attempted[i] {
            return Err(BoardError::AlreadyAttacked);
        }
        self.attempted[i] = true;

        let outcome = match self.ship_at[i] {
            Some(ship_index) => {
                let ship = &mut self.ships[ship_index];
                ship.register_hit(row, col);
                if ship.is_sunk() {
                    self.cells[i] = CellState::Sunk;
                    AttackOutcome::Sunk(ship_index)
                } else {
                    self.cells[i] = CellState::Hit;
                    AttackOutcome::Hit(ship_index)
                }
            }
            None => {
                self.cells[i] = CellState::Miss;
                self.missed.push((row, col));
                AttackOutcome::Miss
            }
        };
        debug!("attack at ({row}, {col}): {outcome:?}");
        Ok(outcome)
    }

    /// Returns `true` when every placed ship is sunk. A board with no ships
    /// trivially counts as all-sunk; the controller only evaluates the win
    /// condition once setup has completed.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Relabel every cell of `ship_index` as sunk. `attack` only marks the
    /// just-attacked cell, so earlier hits of the same ship need this once
    /// the final hit lands.
    pub fn mark_sunk_cells(&mut self, ship_index: usize) {
        for i in 0..self.cells.len() {
            if self.ship_at[i] == Some(ship_index) {
                self.cells[i] = CellState::Sunk;
            }
        }
    }

    /// Render contract: the full grid as rows of cell states.
    pub fn cell_states(&self) -> Vec<Vec<CellState>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.cells[row * self.size + col])
                    .collect()
            })
            .collect()
    }
}
