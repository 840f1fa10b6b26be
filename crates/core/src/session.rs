//! Game session module - one timed game from start to completion
//!
//! This module ties together the board, the player cursor and the countdown.
//! It implements the turn protocol (flip, compare, adjust time, check for
//! completion) and the reveal pause between the second flip and the
//! comparison.
//!
//! The session never touches a renderer. Callers feed it [`GameCommand`]s,
//! advance the reveal pause with [`GameSession::advance`], and read back state
//! through [`GameSession::snapshot`] and [`GameSession::drain_events`].

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::error::ConfigError;
use crate::factory::{BoardConfig, BoardFactory};
use crate::player::Player;
use crate::snapshot::{GameEvent, GameSnapshot, Phase, PlayerSnapshot, TileFace, TileSnapshot};
use crate::timer::Countdown;
use crate::types::*;

/// Timing and scoring rules of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_seconds: i32,
    /// Added to the countdown when a pair is found
    pub pair_found_bonus: i32,
    /// Added when a rejected pair contained a tile that was already opened
    pub pair_not_found_bonus: i32,
    pub critical_seconds: i32,
    /// How long both tiles stay visible before the comparison (0 = immediate)
    pub reveal_pause_ms: u32,
    pub player_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_seconds: DEFAULT_STARTING_SECONDS,
            pair_found_bonus: DEFAULT_PAIR_FOUND_BONUS,
            pair_not_found_bonus: DEFAULT_PAIR_NOT_FOUND_BONUS,
            critical_seconds: DEFAULT_CRITICAL_SECONDS,
            reveal_pause_ms: REVEAL_PAUSE_MS,
            player_name: "Player".to_string(),
        }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub session: SessionConfig,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    player: Player,
    countdown: Countdown,
    config: SessionConfig,
    phase: Phase,
    /// Remaining reveal pause while `phase == Resolving`.
    reveal_ms_left: u32,
    /// Ticks that arrived during the reveal pause, replayed after resolution.
    deferred_ticks: u32,
    events: Vec<GameEvent>,
    seed: u32,
}

impl GameSession {
    /// Validate the configuration and build a random board from `seed`
    pub fn new(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let mut factory = BoardFactory::new(config.board, seed)?;
        let board = factory.build();
        let mut session = Self::with_board(board, config.session.clone());
        session.seed = seed;
        Ok(session)
    }

    /// Session over an already-built board
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        let player = Player::new(config.player_name.clone(), 1, 1);
        let countdown = Countdown::new(config.starting_seconds);
        Self {
            board,
            player,
            countdown,
            config,
            phase: Phase::Idle,
            reveal_ms_left: 0,
            deferred_ticks: 0,
            events: Vec::new(),
            seed: 0,
        }
    }

    /// Start accepting commands
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::AwaitingFirstFlip;
        info!(
            "game started: {}x{} board, {}s on the clock",
            self.board.rows(),
            self.board.columns(),
            self.countdown.remaining_seconds()
        );
        self.push_player_moved();
        self.push_time_changed();
        if self.countdown.is_expired() {
            self.complete(CompletionReason::NoTime);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.completion().is_some()
    }

    pub fn completion(&self) -> Option<CompletionReason> {
        self.phase.completion()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn remaining_seconds(&self) -> i32 {
        self.countdown.remaining_seconds()
    }

    pub fn is_critical(&self) -> bool {
        self.countdown.is_critical(self.config.critical_seconds)
    }

    /// Apply one command. Returns whether it changed anything.
    ///
    /// Illegal commands (flipping a face-up tile, any command before `start`
    /// or after completion) are ignored.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match (self.phase, command) {
            (Phase::Idle, _) | (Phase::Complete(_), _) => false,
            (Phase::Resolving, GameCommand::Tick) => {
                self.deferred_ticks += 1;
                true
            }
            (Phase::Resolving, _) => false,
            (_, GameCommand::Move(side)) => self.move_player(side),
            (_, GameCommand::Flip) => self.flip(),
            (_, GameCommand::Tick) => self.tick(),
        }
    }

    /// Advance the reveal pause by `elapsed_ms`.
    ///
    /// Returns `true` if the pending pair was resolved during this call.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Resolving {
            return false;
        }
        self.reveal_ms_left = self.reveal_ms_left.saturating_sub(elapsed_ms);
        if self.reveal_ms_left > 0 {
            return false;
        }
        self.finish_reveal();
        true
    }

    /// Milliseconds until the pending pair is compared
    pub fn reveal_ms_left(&self) -> u32 {
        self.reveal_ms_left
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    fn move_player(&mut self, side: Direction) -> bool {
        self.player
            .step(side, self.board.rows(), self.board.columns());
        self.push_player_moved();
        true
    }

    fn flip(&mut self) -> bool {
        let (row, column) = (self.player.row(), self.player.column());
        if self.board.cannot_flip(row, column) {
            return false;
        }
        let Some(tile_id) = self.board.flip_tile(row, column) else {
            return false;
        };
        self.events.push(GameEvent::TileShown(tile_id));

        if !self.board.has_two_flipped() {
            self.phase = Phase::AwaitingSecondFlip;
            return true;
        }

        if self.config.reveal_pause_ms == 0 {
            self.resolve();
        } else {
            self.phase = Phase::Resolving;
            self.reveal_ms_left = self.config.reveal_pause_ms;
        }
        true
    }

    fn finish_reveal(&mut self) {
        self.resolve();
        let deferred = std::mem::take(&mut self.deferred_ticks);
        for _ in 0..deferred {
            if self.is_complete() {
                break;
            }
            self.tick();
        }
    }

    /// Compare the pending pair and settle its effect on the clock.
    ///
    /// The opened flags are read before this round marks them.
    fn resolve(&mut self) {
        let was_opened = self.board.any_flipped_opened();
        let ids: ArrayVec<TileId, 2> = self.board.flipped_ids().iter().copied().collect();

        if self.board.resolve_flipped_pair() {
            if let [first, second] = ids.as_slice() {
                self.events.push(GameEvent::PairSolved([*first, *second]));
            }
            self.add_remaining_seconds(self.config.pair_found_bonus);
        } else {
            for &id in &ids {
                self.events.push(GameEvent::TileHidden(id));
            }
            if was_opened {
                self.add_remaining_seconds(self.config.pair_not_found_bonus);
            }
            self.board.mark_flipped_opened();
        }
        self.board.clear_flipped();
        self.phase = Phase::AwaitingFirstFlip;

        // Action path: a solved board wins over a clock that hit zero.
        if self.board.is_solved() {
            self.complete(CompletionReason::LevelComplete);
        } else if self.countdown.is_expired() {
            self.complete(CompletionReason::NoTime);
        }
    }

    fn add_remaining_seconds(&mut self, seconds: i32) {
        if seconds == 0 || !self.countdown.add(seconds) {
            return;
        }
        debug!(
            "{:+}s, {}s left",
            seconds,
            self.countdown.remaining_seconds()
        );
        self.push_time_changed();
    }

    fn tick(&mut self) -> bool {
        if !self.countdown.tick() {
            return false;
        }
        self.push_time_changed();
        if self.countdown.is_expired() {
            self.complete(CompletionReason::NoTime);
        }
        true
    }

    fn complete(&mut self, reason: CompletionReason) {
        self.phase = Phase::Complete(reason);
        self.countdown.stop();
        self.events.push(GameEvent::Completed(reason));
        info!(
            "game over ({}): {}s left, {} tiles unsolved",
            reason.as_str(),
            self.countdown.remaining_seconds(),
            self.board.unsolved_count()
        );
    }

    fn push_player_moved(&mut self) {
        self.events.push(GameEvent::PlayerMoved {
            row: self.player.row(),
            column: self.player.column(),
            orientation: self.player.orientation(),
        });
    }

    fn push_time_changed(&mut self) {
        self.events.push(GameEvent::TimeChanged {
            remaining_seconds: self.countdown.remaining_seconds(),
            critical: self.is_critical(),
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.columns = self.board.columns();
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|tile| TileSnapshot {
            id: tile.id(),
            key: tile.key(),
            face: if tile.is_solved() {
                TileFace::Solved
            } else if tile.is_flipped() {
                TileFace::Shown
            } else {
                TileFace::Hidden
            },
            opened: tile.is_opened(),
        }));
        out.player = PlayerSnapshot {
            row: self.player.row(),
            column: self.player.column(),
            orientation: self.player.orientation(),
        };
        out.remaining_seconds = self.countdown.remaining_seconds();
        out.critical = self.is_critical();
        out.unsolved_count = self.board.unsolved_count();
        out.phase = self.phase;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
