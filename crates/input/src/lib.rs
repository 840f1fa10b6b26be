//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameCommand`]s and recognises
//! the quit keys. The countdown `Tick` is never produced here; the game loop
//! issues it on a fixed interval.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, should_quit};
