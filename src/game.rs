//! Game controller: setup, attack resolution, turn alternation, win
//! detection and deferred computer-turn scheduling.

use crate::ai::TargetingAi;
use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::config::{AI_TURN_DELAY, BOARD_SIZE};
use crate::placement::ShipPlacer;
use crate::player::{Player, PlayerKind};
use log::{debug, info};
use rand::Rng;
use std::time::Duration;

/// Lifecycle of a single game instance. One-way except through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SettingUp,
    Playing,
    GameOver,
}

/// Notifications for UI collaborators. Returned from the operations that
/// produce them; nothing in the core depends on anyone consuming them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A ship on `owner`'s board was sunk.
    ShipSunk {
        owner: PlayerKind,
        ship: usize,
        coordinates: Vec<(usize, usize)>,
    },
    GameOver {
        winner: PlayerKind,
    },
    TurnChanged {
        current: PlayerKind,
    },
}

/// Outcome of one resolved attack plus the events it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub coordinate: (usize, usize),
    pub outcome: AttackOutcome,
    pub events: Vec<GameEvent>,
}

/// Handle for a scheduled computer turn. A stale token (superseded by a
/// newer schedule, a cancel, a reset, or game over) fires as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnToken {
    epoch: u64,
}

/// Orchestrates two players through setup, alternating attacks and win
/// detection. Owns all game state, so multiple games can run side by side.
pub struct Game {
    human: Player,
    computer: Player,
    human_placer: ShipPlacer,
    computer_placer: ShipPlacer,
    ai: TargetingAi,
    phase: Phase,
    current: PlayerKind,
    winner: Option<PlayerKind>,
    epoch: u64,
    pending: Option<TurnToken>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_board_size(BOARD_SIZE)
    }

    pub fn with_board_size(size: usize) -> Self {
        Game {
            human: Player::new(PlayerKind::Human, size),
            computer: Player::new(PlayerKind::Automated, size),
            human_placer: ShipPlacer::new(),
            computer_placer: ShipPlacer::new(),
            ai: TargetingAi::new(),
            phase: Phase::SettingUp,
            current: PlayerKind::Human,
            winner: None,
            epoch: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn winner(&self) -> Option<PlayerKind> {
        self.winner
    }

    pub fn current_player(&self) -> PlayerKind {
        self.current
    }

    pub fn opponent(&self) -> PlayerKind {
        self.current.opponent()
    }

    pub fn board(&self, kind: PlayerKind) -> &Board {
        self.player(kind).board()
    }

    /// Token of the scheduled computer turn, if one is outstanding.
    pub fn pending_turn(&self) -> Option<TurnToken> {
        self.pending
    }

    /// Presentation delay a caller should wait before firing a scheduled
    /// computer turn.
    pub fn ai_turn_delay() -> Duration {
        AI_TURN_DELAY
    }

    fn player(&self, kind: PlayerKind) -> &Player {
        match kind {
            PlayerKind::Human => &self.human,
            PlayerKind::Automated => &self.computer,
        }
    }

    fn player_mut(&mut self, kind: PlayerKind) -> &mut Player {
        match kind {
            PlayerKind::Human => &mut self.human,
            PlayerKind::Automated => &mut self.computer,
        }
    }

    // ---- setup ----------------------------------------------------------

    /// True once both fleets are fully placed.
    pub fn setup_complete(&self) -> bool {
        self.human_placer.all_placed() && self.computer_placer.all_placed()
    }

    /// Validation half of the placement-input contract.
    pub fn is_valid_human_placement(&self, coordinates: &[(usize, usize)]) -> bool {
        self.human_placer
            .is_valid_placement(self.human.board(), coordinates)
    }

    /// Commit the next human fleet ship at the given coordinates.
    pub fn place_human_ship(
        &mut self,
        coordinates: &[(usize, usize)],
    ) -> Result<usize, BoardError> {
        let index = self
            .human_placer
            .place_next(self.human.board_mut(), coordinates)?;
        self.maybe_begin_play();
        Ok(index)
    }

    /// Randomly place the remaining fleet for one side.
    pub fn place_fleet_randomly<R: Rng>(
        &mut self,
        kind: PlayerKind,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        match kind {
            PlayerKind::Human => self
                .human_placer
                .place_randomly(rng, self.human.board_mut())?,
            PlayerKind::Automated => self
                .computer_placer
                .place_randomly(rng, self.computer.board_mut())?,
        }
        self.maybe_begin_play();
        Ok(())
    }

    fn maybe_begin_play(&mut self) {
        if self.phase == Phase::SettingUp && self.setup_complete() {
            self.phase = Phase::Playing;
            self.current = PlayerKind::Human;
            info!("setup complete, play begins");
        }
    }

    // ---- attacks --------------------------------------------------------

    /// Apply an attack against `target`'s board. Outside the playing phase
    /// this is a documented silent no-op (`Ok(None)`); a duplicate
    /// coordinate is an explicit error. Sinking a ship relabels all of its
    /// cells; sinking the last one ends the game with the attacker as
    /// winner.
    pub fn apply_attack(
        &mut self,
        target: PlayerKind,
        row: usize,
        col: usize,
    ) -> Result<Option<AttackReport>, BoardError> {
        if self.phase != Phase::Playing {
            return Ok(None);
        }
        let attacker = target.opponent();
        let outcome = self.player_mut(target).board_mut().attack(row, col)?;

        let mut events = Vec::new();
        if let AttackOutcome::Sunk(ship_index) = outcome {
            let board = self.player_mut(target).board_mut();
            board.mark_sunk_cells(ship_index);
            let coordinates = board.ship(ship_index).hit_positions().to_vec();
            info!("ship {ship_index} on the {target:?} board sunk");
            events.push(GameEvent::ShipSunk {
                owner: target,
                ship: ship_index,
                coordinates,
            });
        }
        if self.player(target).board().all_sunk() {
            self.phase = Phase::GameOver;
            self.winner = Some(attacker);
            // a late-firing scheduled turn must not attack a finished game
            self.pending = None;
            info!("game over, winner: {attacker:?}");
            events.push(GameEvent::GameOver { winner: attacker });
        }
        Ok(Some(AttackReport {
            coordinate: (row, col),
            outcome,
            events,
        }))
    }

    /// Swap the current player. No-op once the game is over; returns the
    /// turn-changed notification when a swap happened.
    pub fn advance_turn(&mut self) -> Option<GameEvent> {
        if self.is_game_over() {
            return None;
        }
        self.current = self.current.opponent();
        debug!("turn: {:?}", self.current);
        Some(GameEvent::TurnChanged {
            current: self.current,
        })
    }

    // ---- computer turn scheduling ---------------------------------------

    /// Schedule the automated side's next attack. Any previously scheduled
    /// turn is cancelled first, so at most one token is ever live. The
    /// caller waits `ai_turn_delay()` before firing.
    pub fn schedule_computer_turn(&mut self) -> Option<TurnToken> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.epoch += 1;
        let token = TurnToken { epoch: self.epoch };
        self.pending = Some(token);
        Some(token)
    }

    /// Invalidate any scheduled computer turn.
    pub fn cancel_pending_turn(&mut self) {
        self.pending = None;
    }

    /// Run a scheduled computer turn: select a target on the human board,
    /// attack it, feed the outcome back to the AI and hand the turn back.
    /// Stale tokens are silent no-ops so a late-firing timer can never
    /// mutate a newer game.
    pub fn fire_computer_turn<R: Rng>(
        &mut self,
        token: TurnToken,
        rng: &mut R,
    ) -> Result<Option<AttackReport>, BoardError> {
        if self.pending != Some(token) {
            return Ok(None);
        }
        self.pending = None;
        if self.phase != Phase::Playing {
            return Ok(None);
        }

        let (row, col) = self.ai.select_target(rng, self.human.board());
        let mut report = match self.apply_attack(PlayerKind::Human, row, col)? {
            Some(report) => report,
            None => return Ok(None),
        };
        self.ai.record_outcome(self.human.board(), (row, col));
        if let Some(event) = self.advance_turn() {
            report.events.push(event);
        }
        Ok(Some(report))
    }

    // ---- reset ----------------------------------------------------------

    /// Full reset to a fresh setup phase. Boards are reinitialized in place;
    /// placers and AI are recreated so no stale pursuit state leaks into the
    /// next game.
    pub fn reset(&mut self) {
        self.pending = None;
        self.epoch += 1;
        let size = self.human.board().size();
        self.human.reset(size);
        self.computer.reset(size);
        self.human_placer = ShipPlacer::new();
        self.computer_placer = ShipPlacer::new();
        self.ai = TargetingAi::new();
        self.phase = Phase::SettingUp;
        self.current = PlayerKind::Human;
        self.winner = None;
        info!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
