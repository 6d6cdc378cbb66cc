//! Headless driver: one command per input line, one JSON message per output
//! line. Ticks are supplied by the caller, so a session is fully reproducible
//! from its seed and input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::core::{GameSnapshot, SnakeMachine};
use crate::protocol::{
    build_observation, create_error, parse_command, Command, ErrorMessage, ObservationMessage,
    ParseError,
};

/// Outbound message for one input line.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Observation(ObservationMessage),
    Error(ErrorMessage),
}

pub struct Headless {
    machine: SnakeMachine,
    snap: GameSnapshot,
    seq: u64,
}

impl Headless {
    pub fn new(machine: SnakeMachine) -> Self {
        let snap = machine.snapshot();
        Self {
            machine,
            snap,
            seq: 0,
        }
    }

    pub fn machine(&self) -> &SnakeMachine {
        &self.machine
    }

    /// Observation of the current state, consuming a sequence number.
    pub fn observe(&mut self) -> ObservationMessage {
        self.seq += 1;
        self.machine.snapshot_into(&mut self.snap);
        build_observation(&self.snap, self.seq, None)
    }

    /// Handle one input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return None,
            Err(e) => {
                self.seq += 1;
                debug!("rejected line {}: {}", self.seq, e);
                return Some(Reply::Error(create_error(self.seq, &e.to_string())));
            }
        };

        let reply = match command {
            Command::Observe => self.observe(),
            Command::Event(event) => {
                self.machine.send(event);
                self.seq += 1;
                self.machine.snapshot_into(&mut self.snap);
                build_observation(&self.snap, self.seq, Some(event))
            }
        };
        Some(Reply::Observation(reply))
    }

    /// Serve `input` until EOF: an initial observation, then one reply per
    /// non-blank line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("headless session started");
        write_line(&mut output, &self.observe())?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            if let Some(reply) = self.handle_line(&line) {
                write_line(&mut output, &reply)?;
            }
        }

        info!("headless session ended after {} messages", self.seq);
        Ok(())
    }
}

fn write_line<W: Write, T: Serialize>(out: &mut W, msg: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, msg).context("failed to encode message")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
