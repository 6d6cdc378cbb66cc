//! Adapter module - headless control over a line-delimited JSON protocol
//!
//! Lets scripts, bots and tests drive the game without a terminal. The driver
//! reads one command per line and answers each with a JSON message describing
//! the full game state.
//!
//! # Message Types
//!
//! ## Client -> Game
//!
//! - a bare command: `up`, `down`, `left`, `right`, `pause`, `tick`,
//!   `new-game`, `observe` (case-insensitive)
//! - **event**: `{"type":"event","event":"up"}`
//! - **observe**: `{"type":"observe"}`
//!
//! ## Game -> Client
//!
//! - **observation**: phase, score, snake, apple and per-cell tags
//! - **error**: unparseable or unknown command
//!
//! # Example Protocol Flow
//!
//! ```text
//! Game -> Client: {"type":"observation","seq":1,"phase":"new-game",...}
//! Client -> Game: right
//! Game -> Client: {"type":"observation","seq":2,"phase":"playing",...,"last_event":"right"}
//! Client -> Game: tick
//! Game -> Client: {"type":"observation","seq":3,"phase":"playing",...,"last_event":"tick"}
//! Client -> Game: jump
//! Game -> Client: {"type":"error","seq":4,"message":"unknown command: jump"}
//! ```
//!
//! Nothing advances on its own: the client sends `tick` to move the snake.

pub mod headless;
pub mod protocol;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use headless::{Headless, Reply};
pub use protocol::*;
