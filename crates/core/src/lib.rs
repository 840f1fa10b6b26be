//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game rules, the board/tile state machine
//! and the timer-driven completion logic. It has **no dependencies** on
//! rendering, terminals or configuration files, making it:
//!
//! - **Deterministic**: the same seed produces the same board
//! - **Testable**: every rule is exercised by unit tests next to the code
//! - **Portable**: any front end can drive it through commands and snapshots
//!
//! # Module Structure
//!
//! - [`board`]: tiles, the pending pair, match resolution, neighbour wiring
//! - [`factory`]: validated, shuffled board construction
//! - [`session`]: the turn protocol, reveal pause and completion rules
//! - [`player`]: the cursor and its facing direction
//! - [`timer`]: the countdown
//! - [`layout`]: cell to surface geometry for renderers
//! - [`rng`]: seeded shuffling and key sampling
//! - [`snapshot`]: render-side state copies and change events
//!
//! # Game Rules
//!
//! - Flip two tiles per turn. Equal keys stay face-up (solved) and add the
//!   pair-found bonus to the clock.
//! - Different keys turn back face-down after a short reveal pause. If either
//!   had already been rejected before, the pair-not-found bonus is added.
//! - The game ends when every pair is found (`LevelComplete`) or the clock
//!   reaches zero (`NoTime`).
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, GameSession};
//! use tui_memory_types::{CompletionReason, Direction, GameCommand};
//!
//! let mut game = GameSession::new(&GameConfig::default(), 12345).unwrap();
//! game.start();
//!
//! game.apply(GameCommand::Flip);
//! game.apply(GameCommand::Move(Direction::Right));
//! game.apply(GameCommand::Flip);
//! game.advance(500);
//!
//! for _ in 0..1000 {
//!     game.apply(GameCommand::Tick);
//! }
//! assert_eq!(game.completion(), Some(CompletionReason::NoTime));
//! ```

pub mod board;
pub mod error;
pub mod factory;
pub mod layout;
pub mod player;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use error::ConfigError;
pub use factory::{BoardConfig, BoardFactory, IdGenerator};
pub use layout::{LayoutConfig, PositionDescriptor, Rect};
pub use player::Player;
pub use rng::SimpleRng;
pub use session::{GameConfig, GameSession, SessionConfig};
pub use snapshot::{GameEvent, GameSnapshot, Phase, PlayerSnapshot, TileFace, TileSnapshot};
pub use timer::Countdown;
