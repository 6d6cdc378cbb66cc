//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay. It
//! renders into a simple framebuffer that is diffed and flushed to a terminal
//! backend, with no widget or layout library in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render every grid cell from `core::classify`, so turns and the tail are
//!   drawn with the same rules the game uses
//! - Keep a square-ish aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_glyph, cell_origin, AnchorY, GameView, Viewport, CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
