use std::time::Duration;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
/// Lengths each side must place before play begins.
pub const FLEET: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];
/// Retry budget per ship during randomized placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
/// Presentation delay before a scheduled computer turn fires.
pub const AI_TURN_DELAY: Duration = Duration::from_millis(2_000);
