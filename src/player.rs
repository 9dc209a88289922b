//! The two sides of a game: one human, one automated.

use crate::board::Board;

/// Who controls a side. The controller dispatches on this once instead of
/// sprinkling automated-or-not checks around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Automated,
}

impl PlayerKind {
    /// The other side.
    pub fn opponent(self) -> PlayerKind {
        match self {
            PlayerKind::Human => PlayerKind::Automated,
            PlayerKind::Automated => PlayerKind::Human,
        }
    }
}

/// A participant and their board.
pub struct Player {
    kind: PlayerKind,
    board: Board,
}

impl Player {
    pub fn new(kind: PlayerKind, board_size: usize) -> Self {
        Player {
            kind,
            board: Board::new(board_size),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Reset in place for a new game: fresh board, same identity.
    pub fn reset(&mut self, board_size: usize) {
        self.board = Board::new(board_size);
    }
}
