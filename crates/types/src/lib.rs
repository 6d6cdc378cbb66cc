//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless protocol).
//!
//! # Grid
//!
//! The playfield is a fixed rectangular grid of cells:
//!
//! - **Width**: 25 columns (indexed 0-24)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Origin**: (0, 0) is the top-left cell; `y` grows downward
//!
//! A [`GridSize`] is an exclusive upper bound: a point is on the grid when
//! `0 <= x < width` and `0 <= y < height`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed period between movement steps while playing |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point, SnakeEvent};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.offset(Direction::Up), Point::new(3, 3));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(SnakeEvent::from_str("up"), Some(SnakeEvent::ArrowKey(Direction::Up)));
//! ```

/// Default grid dimensions
pub const GRID_WIDTH: i32 = 25;
pub const GRID_HEIGHT: i32 = 15;

/// Fixed tick period (in milliseconds)
pub const TICK_MS: u64 = 100;

/// Number of segments in a freshly spawned snake
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Smallest grid width that fits the initial snake centered on the grid
pub const MIN_GRID_WIDTH: i32 = 4;

/// Largest grid extent on either axis the terminal layout can address
pub const MAX_GRID_DIM: i32 = 1000;

/// Integer grid-cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Exclusive upper bound of the grid (`x` = width, `y` = height).
pub type GridSize = Point;

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector from `self` to `other`.
    pub fn delta_to(self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    pub fn manhattan(self, other: Point) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Check whether the point lies inside a grid of the given size.
    ///
    /// ```
    /// use tui_snake_types::{GridSize, Point};
    ///
    /// let grid = GridSize::new(25, 15);
    /// assert!(Point::new(0, 0).is_within(grid));
    /// assert!(Point::new(24, 14).is_within(grid));
    /// assert!(!Point::new(25, 0).is_within(grid));
    /// assert!(!Point::new(0, -1).is_within(grid));
    /// ```
    pub fn is_within(self, grid: GridSize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < grid.x && self.y < grid.y
    }
}

/// Movement direction.
///
/// Only the opposite pairing matters for game rules:
/// - **Up** ↔ **Down**
/// - **Left** ↔ **Right**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step in screen coordinates (`Up` decreases `y`).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Inverse of [`Direction::delta`]. Returns `None` for anything that is
    /// not a unit cardinal vector.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Parse from string (case-insensitive)
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One snake segment: the cell it occupies and the direction the snake was
/// moving when it arrived there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyPart {
    pub point: Point,
    pub dir: Direction,
}

impl BodyPart {
    pub const fn new(x: i32, y: i32, dir: Direction) -> Self {
        Self {
            point: Point::new(x, y),
            dir,
        }
    }
}

/// Machine state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    NewGame,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NewGame => "new-game",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game-over",
        }
    }
}

/// Inbound events consumed by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeEvent {
    ArrowKey(Direction),
    Pause,
    Tick,
    NewGame,
}

impl SnakeEvent {
    /// Parse event from string (for the headless protocol)
    ///
    /// Bare direction names map to [`SnakeEvent::ArrowKey`].
    ///
    /// ```
    /// use tui_snake_types::{Direction, SnakeEvent};
    ///
    /// assert_eq!(SnakeEvent::from_str("Left"), Some(SnakeEvent::ArrowKey(Direction::Left)));
    /// assert_eq!(SnakeEvent::from_str("new-game"), Some(SnakeEvent::NewGame));
    /// assert_eq!(SnakeEvent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "pause" => Some(SnakeEvent::Pause),
            "tick" => Some(SnakeEvent::Tick),
            "new-game" | "newgame" | "new_game" => Some(SnakeEvent::NewGame),
            other => Direction::from_str(other).map(SnakeEvent::ArrowKey),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeEvent::ArrowKey(dir) => dir.as_str(),
            SnakeEvent::Pause => "pause",
            SnakeEvent::Tick => "tick",
            SnakeEvent::NewGame => "new-game",
        }
    }
}
