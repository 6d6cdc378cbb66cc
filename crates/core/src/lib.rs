//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, the state machine driving them, and
//! the per-cell geometry used by renderers. It has **zero dependencies** on UI,
//! timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain method call; time only advances on `Tick`
//! - **Portable**: Runs behind the terminal UI, the headless protocol, or a test
//! - **Fast**: Cell classification is allocation-free
//!
//! # Module Structure
//!
//! - [`snake`]: Ordered body segments with movement, growth and collision queries
//! - [`apple`]: Uniform apple placement on free cells
//! - [`machine`]: `new-game` / `playing` / `paused` / `game-over` state machine
//! - [`geometry`]: Cell classification (head, body, turn corner, tail, apple)
//! - [`snapshot`]: Read-only view handed to renderers and encoders
//! - [`config`]: Grid, tick period and seed, with environment overrides
//! - [`rng`]: Seeded LCG
//!
//! # Game Rules
//!
//! - The snake starts centered, three segments long, facing right
//! - Each tick moves the head one cell; the tail follows
//! - Eating the apple grows the snake by one segment and scores a point
//! - Leaving the grid or running into the body ends the game
//! - A direction change cannot reverse the direction committed since the last move
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GridSize, SnakeMachine};
//! use tui_snake_core::types::{Direction, GamePhase, SnakeEvent};
//!
//! let mut game = SnakeMachine::new(GridSize::new(25, 15), 12345);
//! game.send(SnakeEvent::ArrowKey(Direction::Up));
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.send(SnakeEvent::Tick);
//! assert_eq!(game.context().snake().head().point.y, 6);
//! ```

pub mod apple;
pub mod config;
pub mod geometry;
pub mod machine;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apple::place_apple;
pub use config::{ConfigError, GameConfig};
pub use geometry::{classify, classify_grid, tail_direction, turn_corner, CellKind, Corner};
pub use machine::{Action, GameContext, SnakeMachine, Transition};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{BodyPart, Direction, GamePhase, GridSize, Point, SnakeEvent};
