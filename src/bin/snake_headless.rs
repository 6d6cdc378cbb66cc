//! Headless snake: drive the game over stdin/stdout.
//!
//! Reads one command per line (`up`, `tick`, `new-game`, ... or JSON) and
//! writes one JSON observation per line. Configure with the same `SNAKE_*`
//! variables as the terminal game; set `SNAKE_SEED` for reproducible runs.

use std::io;

use anyhow::Result;

use tui_snake::adapter::Headless;
use tui_snake::core::{GameConfig, SnakeMachine};
use tui_snake::logging;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init_from_config(&config)?;
    let machine = SnakeMachine::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Headless::new(machine).run(stdin.lock(), stdout.lock())
}
