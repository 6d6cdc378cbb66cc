//! Game configuration (grid, tick period, seed) with environment overrides.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{GridSize, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_DIM, MIN_GRID_WIDTH, TICK_MS};

/// Runtime configuration shared by the terminal and headless front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_ms: u64,
    /// `None` picks a time-derived seed at startup.
    pub seed: Option<u32>,
    /// Log file; logging stays off when unset.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::new(GRID_WIDTH, GRID_HEIGHT),
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `SNAKE_*` variables; unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parse_var(&lookup, "SNAKE_GRID_WIDTH").unwrap_or(defaults.grid.x);
        let height = parse_var(&lookup, "SNAKE_GRID_HEIGHT").unwrap_or(defaults.grid.y);
        let tick_ms = parse_var(&lookup, "SNAKE_TICK_MS").unwrap_or(defaults.tick_ms);
        let seed = parse_var::<u32>(&lookup, "SNAKE_SEED");

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            grid: GridSize::new(width, height),
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.x < MIN_GRID_WIDTH {
            return Err(ConfigError::GridTooNarrow(self.grid.x));
        }
        if self.grid.y < 1 {
            return Err(ConfigError::GridTooShort(self.grid.y));
        }
        if self.grid.x > MAX_GRID_DIM || self.grid.y > MAX_GRID_DIM {
            return Err(ConfigError::GridTooLarge(self.grid));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1);
            nanos.max(1)
        })
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

/// Rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    GridTooNarrow(i32),
    GridTooShort(i32),
    GridTooLarge(GridSize),
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooNarrow(w) => write!(
                f,
                "grid width {} is too narrow (minimum {})",
                w, MIN_GRID_WIDTH
            ),
            ConfigError::GridTooShort(h) => write!(f, "grid height {} must be at least 1", h),
            ConfigError::GridTooLarge(g) => write!(
                f,
                "grid {}x{} is too large (maximum {} per side)",
                g.x, g.y, MAX_GRID_DIM
            ),
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
