//! Board factory - validated, randomized board construction
//!
//! A factory is created from a [`BoardConfig`], which is validated up front.
//! Each [`BoardFactory::build`] call picks `tiles / 2` distinct pair keys from
//! the key pool, duplicates them, shuffles the result and lays it out
//! row-major.

use crate::board::{Board, Tile};
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{
    PairKey, TileId, DEFAULT_COLUMNS, DEFAULT_MAX_PAIR_TILES, DEFAULT_ROWS,
};

/// Grid size and key pool limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: u8,
    pub columns: u8,
    /// Largest tile count a board may have
    pub max_pair_tiles: u16,
    /// Number of distinct images available (`1..=key_pool_size`)
    pub key_pool_size: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            max_pair_tiles: DEFAULT_MAX_PAIR_TILES,
            key_pool_size: DEFAULT_MAX_PAIR_TILES / 2,
        }
    }
}

impl BoardConfig {
    pub fn tiles(&self) -> u16 {
        self.rows as u16 * self.columns as u16
    }

    pub fn pairs(&self) -> u16 {
        self.tiles() / 2
    }

    /// Check that a board of this size can be filled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let tiles = self.tiles();
        if tiles % 2 != 0 {
            return Err(ConfigError::OddTileCount {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if tiles > self.max_pair_tiles {
            return Err(ConfigError::TooManyTiles {
                tiles,
                max: self.max_pair_tiles,
            });
        }
        if self.pairs() > self.key_pool_size {
            return Err(ConfigError::KeyPoolTooSmall {
                needed: self.pairs(),
                available: self.key_pool_size,
            });
        }
        Ok(())
    }
}

/// Sequential tile ids, scoped to one board construction
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: TileId,
}

impl IdGenerator {
    pub fn new(starting_at: TileId) -> Self {
        Self { next: starting_at }
    }

    pub fn next_id(&mut self) -> TileId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Builds shuffled, fully-paired boards
#[derive(Debug, Clone)]
pub struct BoardFactory {
    config: BoardConfig,
    rng: SimpleRng,
}

impl BoardFactory {
    /// Validate `config` and seed the factory's RNG
    pub fn new(config: BoardConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SimpleRng::new(seed),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Build a new randomized board
    pub fn build(&mut self) -> Board {
        let mut keys: Vec<PairKey> = self
            .rng
            .sample_keys(self.config.key_pool_size, self.config.pairs() as usize)
            .into_iter()
            .flat_map(|key| [key, key])
            .collect();
        self.rng.shuffle(&mut keys);

        // Validation in `new` guarantees the key count matches the grid.
        assemble(self.config.rows, self.config.columns, &keys)
    }

    /// Lay out a fixed key sequence row-major.
    ///
    /// Pair structure is not checked here; this is the deterministic entry
    /// point used to recreate a known board.
    pub fn layout(rows: u8, columns: u8, keys: &[PairKey]) -> Result<Board, ConfigError> {
        let expected = rows as usize * columns as usize;
        if keys.len() != expected {
            return Err(ConfigError::KeyCountMismatch {
                expected,
                actual: keys.len(),
            });
        }
        Ok(assemble(rows, columns, keys))
    }
}

fn assemble(rows: u8, columns: u8, keys: &[PairKey]) -> Board {
    let mut ids = IdGenerator::new(0);
    let mut board = Board::new(rows, columns);
    for &key in keys {
        board.add_tile(Tile::new(ids.next_id(), key));
    }
    board.connect_all_tiles();
    board
}
