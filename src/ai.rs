//! Hunt/target opponent AI with direction inference.

use crate::board::Board;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Stateful attack selector for the automated player. Hunts randomly until a
/// ship is found, probes the cells around the hit, and once two hits line up,
/// walks the inferred direction until the ship sinks.
#[derive(Debug, Default)]
pub struct TargetingAi {
    last_hit: Option<(usize, usize)>,
    pending_target: Option<(usize, usize)>,
    active_ship: Option<usize>,
}

impl TargetingAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last coordinate that hit an unsunk ship, if any.
    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    /// Coordinate queued for the next attack, if any.
    pub fn pending_target(&self) -> Option<(usize, usize)> {
        self.pending_target
    }

    /// Index of the ship currently being pursued, if any.
    pub fn active_ship(&self) -> Option<usize> {
        self.active_ship
    }

    /// Choose the next attack coordinate against `board`. A queued
    /// directional target takes priority, then the neighbourhood of the last
    /// hit, then random hunting.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R, board: &Board) -> (usize, usize) {
        if let Some(target) = self.pending_target.take() {
            debug!("ai: pursuing inferred target {target:?}");
            return target;
        }
        if let Some(hit) = self.last_hit {
            return Self::probe_adjacent(rng, board, hit);
        }
        Self::hunt(rng, board)
    }

    /// Update targeting state after the chosen attack has been applied.
    /// Reads post-attack board state, so the ship at `coordinate` already
    /// includes the hit just registered.
    pub fn record_outcome(&mut self, board: &Board, coordinate: (usize, usize)) {
        let struck = board.ship_index_at(coordinate.0, coordinate.1);
        let struck_sunk = struck.is_some_and(|index| board.ship(index).is_sunk());
        let pursued_sunk = self
            .active_ship
            .is_some_and(|index| board.ship(index).is_sunk());

        match struck {
            Some(index) if !struck_sunk => {
                self.last_hit = Some(coordinate);
                self.active_ship = Some(index);
                let hits = board.ship(index).hit_positions();
                if hits.len() >= 2 {
                    self.pending_target = Self::direction_target(board, hits);
                }
            }
            _ => {
                // Missed (or sank something else) mid-pursuit: keep walking
                // the known ship from its hit history.
                if let Some(index) = self.active_ship {
                    let ship = board.ship(index);
                    if !ship.is_sunk() && ship.hit_count() >= 2 {
                        self.pending_target =
                            Self::direction_target(board, ship.hit_positions());
                        self.last_hit = None;
                    }
                }
            }
        }

        if struck_sunk || pursued_sunk {
            debug!("ai: target sunk, returning to hunt mode");
            self.last_hit = None;
            self.pending_target = None;
            self.active_ship = None;
        }
    }

    fn is_valid_attack(board: &Board, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && board.in_bounds(row as usize, col as usize)
            && !board.attempted(row as usize, col as usize)
    }

    /// Probe the four orthogonal neighbours of the last hit in random order,
    /// falling back to hunting when none can be attacked.
    fn probe_adjacent<R: Rng>(
        rng: &mut R,
        board: &Board,
        (row, col): (usize, usize),
    ) -> (usize, usize) {
        let mut directions = DIRECTIONS;
        directions.shuffle(rng);
        for (dr, dc) in directions {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            if Self::is_valid_attack(board, nr, nc) {
                return (nr as usize, nc as usize);
            }
        }
        Self::hunt(rng, board)
    }

    /// Uniform rejection sampling over unattempted cells. Loops until one is
    /// found; a fully attacked board means the game already ended.
    fn hunt<R: Rng>(rng: &mut R, board: &Board) -> (usize, usize) {
        loop {
            let row = rng.random_range(0..board.size());
            let col = rng.random_range(0..board.size());
            if !board.attempted(row, col) {
                return (row, col);
            }
        }
    }

    /// Infer the pursued ship's orientation from its hit history and pick the
    /// next cell along it. The chronological order is tried first, then the
    /// canonically sorted order, which resolves histories that started
    /// mid-ship.
    fn direction_target(board: &Board, hits: &[(usize, usize)]) -> Option<(usize, usize)> {
        if hits.len() < 2 {
            return None;
        }
        Self::probe_ends(board, hits).or_else(|| {
            let mut sorted = hits.to_vec();
            sorted.sort();
            Self::probe_ends(board, &sorted)
        })
    }

    /// One step past the last hit in the direction of the first two hits,
    /// else one step before the first hit in the opposite direction.
    fn probe_ends(board: &Board, hits: &[(usize, usize)]) -> Option<(usize, usize)> {
        let (first, second) = (hits[0], hits[1]);
        let last = hits[hits.len() - 1];
        let dr = (second.0 as isize - first.0 as isize).signum();
        let dc = (second.1 as isize - first.1 as isize).signum();

        let (fr, fc) = (last.0 as isize + dr, last.1 as isize + dc);
        if Self::is_valid_attack(board, fr, fc) {
            return Some((fr as usize, fc as usize));
        }
        let (br, bc) = (first.0 as isize - dr, first.1 as isize - dc);
        if Self::is_valid_attack(board, br, bc) {
            return Some((br as usize, bc as usize));
        }
        None
    }
}
