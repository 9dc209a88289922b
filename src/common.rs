//! Shared types: attack outcomes and the board error taxonomy.

use core::fmt;

/// Result of attacking a single cell. Hit and sink outcomes carry the index
/// of the ship involved on the attacked board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// No ship at the attacked coordinate.
    Miss,
    /// Hit a segment of the ship at this index; the ship is still afloat.
    Hit(usize),
    /// Final hit; the ship at this index is now sunk.
    Sunk(usize),
}

impl AttackOutcome {
    /// Index of the ship involved, if any.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit(index) | AttackOutcome::Sunk(index) => Some(index),
        }
    }
}

/// Errors returned by board, placement and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship length disagrees with the number of provided coordinates.
    LengthMismatch,
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Coordinate was already attacked.
    AlreadyAttacked,
    /// Proposed placement is off-board, occupied, or touches another ship.
    InvalidPlacement,
    /// Every ship in the fleet manifest has already been committed.
    FleetComplete,
    /// Random placement ran out of retries; the fleet does not fit the board.
    PlacementExhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::LengthMismatch => {
                write!(f, "ship length does not match the provided coordinates")
            }
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
            BoardError::AlreadyAttacked => write!(f, "coordinate was already attacked"),
            BoardError::InvalidPlacement => {
                write!(f, "placement is occupied, adjacent to a ship, or off-board")
            }
            BoardError::FleetComplete => write!(f, "all fleet ships are already placed"),
            BoardError::PlacementExhausted => {
                write!(f, "unable to place ship within the retry budget")
            }
        }
    }
}

impl std::error::Error for BoardError {}
