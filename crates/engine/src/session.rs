//! Game session: the state machine plus the timer that drives it.
//!
//! Bridges the synchronous front-end loop with the async tick timer. The
//! session owns a small tokio runtime; the timer runs there and the game loop
//! drains it with [`Session::pump`].

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, trace};
use tokio::runtime::{Builder, Runtime};

use crate::core::{GameConfig, GameSnapshot, SnakeMachine, Transition};
use crate::ticker::TickTimer;
use crate::types::{GamePhase, SnakeEvent};

/// Queue entry. Ticks remember which timer produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Queued {
    Event(SnakeEvent),
    Tick { timer: u64 },
}

pub struct Session {
    machine: SnakeMachine,
    period: Duration,
    timer: Option<TickTimer>,
    /// Bumped every time a timer starts.
    timer_gen: u64,
    queue: VecDeque<Queued>,
    rt: Runtime,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let machine = SnakeMachine::from_config(config).context("invalid game configuration")?;
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("snake-timer")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;

        info!(
            "session ready: grid {}x{}, tick {:?}",
            config.grid.x,
            config.grid.y,
            config.tick_interval()
        );

        Ok(Self {
            machine,
            period: config.tick_interval(),
            timer: None,
            timer_gen: 0,
            queue: VecDeque::new(),
            rt,
        })
    }

    /// Apply one event immediately and reconcile the timer with the new phase.
    pub fn send(&mut self, event: SnakeEvent) -> Transition {
        let t = self.machine.send(event);
        if t.entered(GamePhase::Playing) {
            self.timer_gen += 1;
            self.timer = Some(TickTimer::start(self.rt.handle(), self.period));
        } else if t.exited(GamePhase::Playing) {
            if let Some(timer) = self.timer.take() {
                timer.stop();
            }
        }
        t
    }

    /// Queue an event for the next [`Session::pump`].
    ///
    /// Ticks the timer delivered before this call are queued ahead of it.
    pub fn enqueue(&mut self, event: SnakeEvent) {
        self.collect_ticks();
        self.queue.push_back(Queued::Event(event));
    }

    fn collect_ticks(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            while timer.try_recv() {
                self.queue.push_back(Queued::Tick {
                    timer: self.timer_gen,
                });
            }
        }
    }

    /// Process queued events and ticks in arrival order, then every tick
    /// delivered since the last [`Session::enqueue`]. Ticks from a timer
    /// that has since stopped are dropped. Returns the number of ticks
    /// applied.
    pub fn pump(&mut self) -> usize {
        let mut ticks = 0;
        loop {
            let next = match self.queue.pop_front() {
                Some(queued) => queued,
                None => match self.timer.as_mut().map(|timer| timer.try_recv()) {
                    Some(true) => Queued::Tick {
                        timer: self.timer_gen,
                    },
                    _ => break,
                },
            };
            match next {
                Queued::Event(event) => {
                    self.send(event);
                }
                Queued::Tick { timer } => {
                    if self.timer.is_some() && timer == self.timer_gen {
                        self.send(SnakeEvent::Tick);
                        ticks += 1;
                    } else {
                        trace!("stale tick from timer {} discarded", timer);
                    }
                }
            }
        }
        ticks
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn tick_interval(&self) -> Duration {
        self.period
    }

    pub fn phase(&self) -> GamePhase {
        self.machine.phase()
    }

    pub fn machine(&self) -> &SnakeMachine {
        &self.machine
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.machine.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.machine.snapshot_into(out);
    }
}
