//! Protocol module - line-delimited messages for the headless driver
//!
//! Inbound lines are either a bare command word (`up`, `tick`, `new-game`,
//! ...) or a JSON object. Outbound lines are always JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CellKind, GameSnapshot};
use crate::types::{Direction, GamePhase, SnakeEvent};

// ============== Client -> Game Messages ==============

/// A parsed inbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(SnakeEvent),
    /// Re-send the current observation without changing state.
    Observe,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum InboundMessage {
    #[serde(rename = "event")]
    Event { event: String },
    #[serde(rename = "observe")]
    Observe,
}

#[derive(Debug)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    Json(serde_json::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::UnknownCommand(s) => write!(f, "unknown command: {}", s),
            ParseError::Json(e) => write!(f, "invalid message: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e)
    }
}

/// Parse one inbound line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    if line.starts_with('{') {
        return match serde_json::from_str::<InboundMessage>(line)? {
            InboundMessage::Event { event } => parse_event(&event).map(Command::Event),
            InboundMessage::Observe => Ok(Command::Observe),
        };
    }

    if line.eq_ignore_ascii_case("observe") {
        return Ok(Command::Observe);
    }
    parse_event(line).map(Command::Event)
}

fn parse_event(s: &str) -> Result<SnakeEvent, ParseError> {
    SnakeEvent::from_str(s).ok_or_else(|| ParseError::UnknownCommand(s.trim().to_string()))
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseLower {
    #[serde(rename = "new-game")]
    NewGame,
    #[serde(rename = "playing")]
    Playing,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "game-over")]
    GameOver,
}

impl From<GamePhase> for PhaseLower {
    fn from(value: GamePhase) -> Self {
        match value {
            GamePhase::NewGame => PhaseLower::NewGame,
            GamePhase::Playing => PhaseLower::Playing,
            GamePhase::Paused => PhaseLower::Paused,
            GamePhase::GameOver => PhaseLower::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionLower {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for DirectionLower {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => DirectionLower::Up,
            Direction::Down => DirectionLower::Down,
            Direction::Left => DirectionLower::Left,
            Direction::Right => DirectionLower::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub x: i32,
    pub y: i32,
    pub dir: DirectionLower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
}

/// Full game state after a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub phase: PhaseLower,
    pub episode_id: u32,
    pub score: u32,
    pub high_score: u32,
    pub direction: DirectionLower,
    pub apple: PointSnapshot,
    pub snake: Vec<SegmentSnapshot>,
    pub grid: GridSnapshot,
    /// Row-major `kind[:orientation]` tags, e.g. `body-turn:right-bottom`.
    pub cells: Vec<String>,
    /// Event applied for this observation; absent for the initial one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub message: String,
}

// ============== Utility Functions ==============

/// `kind[:orientation]` tag for a classified cell.
pub fn cell_tag(kind: CellKind) -> String {
    match kind.orientation_str() {
        Some(o) => format!("{}:{}", kind.kind_str(), o),
        None => kind.kind_str().to_string(),
    }
}

pub fn build_observation(
    snap: &GameSnapshot,
    seq: u64,
    last_event: Option<SnakeEvent>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        phase: snap.phase.into(),
        episode_id: snap.episode_id,
        score: snap.score,
        high_score: snap.high_score,
        direction: snap.direction.into(),
        apple: PointSnapshot {
            x: snap.apple.x,
            y: snap.apple.y,
        },
        snake: snap
            .snake
            .iter()
            .map(|p| SegmentSnapshot {
                x: p.point.x,
                y: p.point.y,
                dir: p.dir.into(),
            })
            .collect(),
        grid: GridSnapshot {
            width: snap.grid_size.x,
            height: snap.grid_size.y,
        },
        cells: snap.cells().map(|(_, kind)| cell_tag(kind)).collect(),
        last_event: last_event.map(|e| e.as_str().to_string()),
    }
}

pub fn create_error(seq: u64, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        message: message.to_string(),
    }
}
