//! Configuration errors.
//!
//! These are the only errors the core can produce. A board or session is never
//! built from a configuration that fails validation.

use thiserror::Error;

/// Invalid board or session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: u8, columns: u8 },

    #[error("board {rows}x{columns} has an odd number of tiles")]
    OddTileCount { rows: u8, columns: u8 },

    #[error("board has {tiles} tiles, maximum is {max}")]
    TooManyTiles { tiles: u16, max: u16 },

    #[error("board needs {needed} distinct pair keys but only {available} are available")]
    KeyPoolTooSmall { needed: u16, available: u16 },

    #[error("expected {expected} tile keys, got {actual}")]
    KeyCountMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = ConfigError::OddTileCount { rows: 3, columns: 3 };
        assert_eq!(err.to_string(), "board 3x3 has an odd number of tiles");

        let err = ConfigError::TooManyTiles { tiles: 64, max: 40 };
        assert!(err.to_string().contains("64"));
        assert!(err.to_string().contains("40"));
    }
}
