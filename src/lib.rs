//! TUI Snake (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_snake::{core,adapter,term,input,engine,types}` and
//! hosts the two binaries.

pub mod logging;

pub use tui_snake_adapter as adapter;
pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
