//! Terminal rendering for the memory board.
//!
//! Snapshots are drawn into a plain framebuffer (`GameView`, no I/O) which
//! `TerminalRenderer` then flushes to the terminal, sending only the cells that
//! changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewLabels, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
