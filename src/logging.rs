//! Logger setup shared by the binaries.
//!
//! Both front-ends own stdout (the alternate screen or the JSON stream), so
//! logs only go to a file, and only when one is configured.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::core::GameConfig;

/// Initialise `env_logger` from `RUST_LOG` (default `info`), writing to
/// `config.log_path`. Returns whether a logger was installed.
pub fn init_from_config(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;
    Ok(true)
}
