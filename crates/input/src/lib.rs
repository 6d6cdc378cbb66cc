//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::SnakeEvent`]s. The snake steers with single
//! presses, so there is no auto-repeat handling here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
