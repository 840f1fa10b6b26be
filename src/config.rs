//! Game configuration: JSON file plus environment overrides.
//!
//! The file is read from `MEMORY_CONFIG`, or from `memory.json` in the working
//! directory when that exists. Every field is optional and falls back to the
//! built-in defaults. A few fields can be overridden from the environment:
//!
//! | Variable          | Field              |
//! |-------------------|--------------------|
//! | `MEMORY_ROWS`     | `rows`             |
//! | `MEMORY_COLUMNS`  | `columns`          |
//! | `MEMORY_SECONDS`  | `starting_seconds` |
//! | `MEMORY_SEED`     | `seed`             |
//! | `MEMORY_LOG_PATH` | `log_path`         |
//!
//! Unparseable override values are ignored.

use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{BoardConfig, GameConfig, LayoutConfig, SessionConfig};
use crate::term::ViewLabels;
use crate::types::*;

pub const CONFIG_ENV: &str = "MEMORY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "memory.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: u8,
    pub columns: u8,
    pub starting_seconds: i32,
    pub pair_found_bonus: i32,
    pub pair_not_found_bonus: i32,
    pub critical_seconds: i32,
    pub max_pair_tiles: u16,
    pub key_pool_size: u16,
    pub reveal_pause_ms: u32,
    pub tick_ms: u32,
    /// Fixed board seed; random per run when absent.
    pub seed: Option<u32>,
    /// Log file; logging is off when absent.
    pub log_path: Option<String>,

    pub player_name: String,
    pub game_title: String,
    pub no_time_title: String,
    pub no_time_description: String,
    pub level_complete_title: String,
    pub level_complete_description: String,

    pub tile_width: i32,
    pub tile_height: i32,
    pub tile_padding: i32,
}

impl Default for Config {
    fn default() -> Self {
        let board = BoardConfig::default();
        let session = SessionConfig::default();
        let layout = LayoutConfig::default();
        let labels = ViewLabels::default();
        Self {
            rows: board.rows,
            columns: board.columns,
            starting_seconds: session.starting_seconds,
            pair_found_bonus: session.pair_found_bonus,
            pair_not_found_bonus: session.pair_not_found_bonus,
            critical_seconds: session.critical_seconds,
            max_pair_tiles: board.max_pair_tiles,
            key_pool_size: board.key_pool_size,
            reveal_pause_ms: session.reveal_pause_ms,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
            player_name: labels.player_name,
            game_title: labels.game_title,
            no_time_title: labels.no_time_title,
            no_time_description: labels.no_time_description,
            level_complete_title: labels.level_complete_title,
            level_complete_description: labels.level_complete_description,
            tile_width: layout.tile_width,
            tile_height: layout.tile_height,
            tile_padding: layout.tile_padding,
        }
    }
}

impl Config {
    /// File (if any) plus process environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV).ok().and_then(non_empty) {
            Some(path) => Self::load_from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| env::var(name).ok());
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `MEMORY_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_parsed(&lookup, "MEMORY_ROWS", &mut self.rows);
        override_parsed(&lookup, "MEMORY_COLUMNS", &mut self.columns);
        override_parsed(&lookup, "MEMORY_SECONDS", &mut self.starting_seconds);

        if let Some(seed) = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok()) {
            self.seed = Some(seed);
        }
        if let Some(path) = lookup("MEMORY_LOG_PATH").and_then(non_empty) {
            self.log_path = Some(path);
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            board: BoardConfig {
                rows: self.rows,
                columns: self.columns,
                max_pair_tiles: self.max_pair_tiles,
                key_pool_size: self.key_pool_size,
            },
            session: SessionConfig {
                starting_seconds: self.starting_seconds,
                pair_found_bonus: self.pair_found_bonus,
                pair_not_found_bonus: self.pair_not_found_bonus,
                critical_seconds: self.critical_seconds,
                reveal_pause_ms: self.reveal_pause_ms,
                player_name: self.player_name.clone(),
            },
        }
    }

    /// Tile geometry; the surface size is replaced by the viewport at render time.
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            tile_padding: self.tile_padding,
            ..LayoutConfig::default()
        }
    }

    pub fn labels(&self) -> ViewLabels {
        ViewLabels {
            game_title: self.game_title.clone(),
            player_name: self.player_name.clone(),
            no_time_title: self.no_time_title.clone(),
            no_time_description: self.no_time_description.clone(),
            level_complete_title: self.level_complete_title.clone(),
            level_complete_description: self.level_complete_description.clone(),
        }
    }
}

fn override_parsed<F, T>(lookup: &F, name: &str, field: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(name).and_then(|s| s.trim().parse().ok()) {
        *field = value;
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_match_core() {
        let config = Config::default();
        assert_eq!(config.game_config(), GameConfig::default());
        assert_eq!(config.labels(), ViewLabels::default());
        assert_eq!(config.layout(), LayoutConfig::default());
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(
            r#"{ "rows": 2, "columns": 3, "player_name": "Ada", "reveal_pause_ms": 0 }"#,
        )
        .unwrap();

        assert_eq!(config.rows, 2);
        assert_eq!(config.columns, 3);
        assert_eq!(config.player_name, "Ada");
        assert_eq!(config.reveal_pause_ms, 0);
        assert_eq!(config.starting_seconds, DEFAULT_STARTING_SECONDS);
        assert_eq!(config.game_config().session.player_name, "Ada");
        assert_eq!(config.labels().player_name, "Ada");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Config::from_json(r#"{ "rows": "four" }"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("MEMORY_ROWS", "2"),
            ("MEMORY_COLUMNS", " 2 "),
            ("MEMORY_SECONDS", "30"),
            ("MEMORY_SEED", "42"),
            ("MEMORY_LOG_PATH", "/tmp/memory.log"),
        ]));

        assert_eq!((config.rows, config.columns), (2, 2));
        assert_eq!(config.starting_seconds, 30);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/memory.log"));
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("MEMORY_ROWS", "many"),
            ("MEMORY_SEED", "-1"),
            ("MEMORY_LOG_PATH", "   "),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Config::load_from_file("/nonexistent/memory.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/memory.json"));
    }
}
