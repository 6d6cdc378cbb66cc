//! Engine module - drives the pure core in real time.
//!
//! The core never reads a clock; time reaches it only as `Tick` events. This
//! crate supplies those ticks from a tokio interval while the game is playing
//! and feeds them, together with front-end input, into the state machine.
//!
//! - [`ticker`]: `TickTimer`, an interval task feeding a bounded channel
//! - [`session`]: `Session`, the machine plus timer lifecycle and event queue

pub mod session;
pub mod ticker;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use session::Session;
pub use ticker::{TickTimer, TICK_BUFFER};
