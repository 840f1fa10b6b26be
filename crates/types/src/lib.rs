//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, key mapping).
//!
//! # Board Dimensions
//!
//! The board is a `rows x columns` grid of tiles, addressed 1-indexed from the
//! top-left corner. The product must be even (every tile has a partner).
//!
//! - **Default grid**: 4 rows x 5 columns (10 pairs)
//! - **Maximum tiles**: 40 (`DEFAULT_MAX_PAIR_TILES`)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Countdown interval (one second per tick) |
//! | `REVEAL_PAUSE_MS` | 500 | Both tiles stay visible before resolution |
//! | `FRAME_MS` | 16 | Input poll / redraw interval |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Direction, DEFAULT_ROWS, DEFAULT_COLUMNS};
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Down.delta(), (1, 0));
//!
//! assert_eq!((DEFAULT_ROWS as u16 * DEFAULT_COLUMNS as u16) % 2, 0);
//! ```

/// Dense tile identifier, `0..rows*columns` in row-major order.
pub type TileId = u16;

/// Image identifier shared by exactly two tiles.
pub type PairKey = u16;

/// Default board rows
pub const DEFAULT_ROWS: u8 = 4;

/// Default board columns
pub const DEFAULT_COLUMNS: u8 = 5;

/// Countdown value at the start of a game
pub const DEFAULT_STARTING_SECONDS: i32 = 60;

/// Seconds added when a pair is found
pub const DEFAULT_PAIR_FOUND_BONUS: i32 = 5;

/// Seconds added when a rejected pair contained an already-opened tile
pub const DEFAULT_PAIR_NOT_FOUND_BONUS: i32 = 1;

/// Remaining seconds at or below which the timer is shown as critical
pub const DEFAULT_CRITICAL_SECONDS: i32 = 10;

/// Largest tile count a board may have
pub const DEFAULT_MAX_PAIR_TILES: u16 = 40;

/// Countdown interval in milliseconds (one tick per second)
pub const TICK_MS: u32 = 1000;

/// How long two flipped tiles stay visible before the pair is resolved
pub const REVEAL_PAUSE_MS: u32 = 500;

/// Input poll / redraw interval in milliseconds
pub const FRAME_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_playable() {
        let tiles = DEFAULT_ROWS as u16 * DEFAULT_COLUMNS as u16;
        assert_eq!(tiles % 2, 0);
        assert!(tiles <= DEFAULT_MAX_PAIR_TILES);
        assert!(DEFAULT_CRITICAL_SECONDS < DEFAULT_STARTING_SECONDS);
        assert!(REVEAL_PAUSE_MS < TICK_MS);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn direction_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }
}

/// Cursor movement and tile neighbour directions
///
/// The player sprite faces the last requested direction, so this doubles as
/// the player's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Up,
    Right,
    Down,
}

impl Direction {
    /// All four directions, in neighbour-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The direction pointing back the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Slot index into a `[T; 4]` neighbour table.
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Row/column delta of a single step.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Commands the presentation layer feeds into a game session
///
/// Each command is an atomic, parameter-less trigger (the direction is part of
/// the command identity, not a runtime argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move the cursor one cell
    Move(Direction),
    /// Flip the tile under the cursor
    Flip,
    /// One countdown step (nominally one second)
    Tick,
}

/// Why a session ended
///
/// - **NoTime**: the countdown reached zero (from a tick or a penalty)
/// - **LevelComplete**: every pair was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionReason {
    NoTime,
    LevelComplete,
}

impl CompletionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionReason::NoTime => "noTime",
            CompletionReason::LevelComplete => "levelComplete",
        }
    }
}
