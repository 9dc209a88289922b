//! A single vessel: length, hit count and hit history.

/// Mutable per-ship state. Hits are recorded in the order they land; the
/// chronological order feeds the opponent AI's direction inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
    hit_positions: Vec<(usize, usize)>,
}

impl Ship {
    pub fn new(length: usize) -> Self {
        Ship {
            length,
            hits: 0,
            hit_positions: Vec::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    /// Coordinates hit so far, oldest first.
    pub fn hit_positions(&self) -> &[(usize, usize)] {
        &self.hit_positions
    }

    /// Record a hit at (`row`, `col`). Silently ignored once the ship is at
    /// capacity, which guards against duplicate-attack bugs upstream.
    pub fn register_hit(&mut self, row: usize, col: usize) {
        if self.hits < self.length {
            self.hits += 1;
            self.hit_positions.push((row, col));
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }
}
