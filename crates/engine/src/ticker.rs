//! Periodic tick source backed by a tokio task.

use std::time::Duration;

use log::{debug, trace};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Ticks that may wait in the channel; further ticks are dropped until the
/// consumer catches up.
pub const TICK_BUFFER: usize = 1;

/// Running interval timer. Dropping it aborts the task and discards any
/// undelivered ticks.
#[derive(Debug)]
pub struct TickTimer {
    task: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl TickTimer {
    /// Spawn a timer on `handle` whose first tick fires one `period` from now.
    pub fn start(handle: &Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(TICK_BUFFER);
        let first = {
            let _guard = handle.enter();
            Instant::now() + period
        };

        let task = handle.spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                match tx.try_send(()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(())) => trace!("tick dropped: consumer behind"),
                    Err(TrySendError::Closed(())) => break,
                }
            }
        });

        debug!("tick timer started ({:?})", period);
        Self { task, rx }
    }

    /// Take one pending tick without blocking.
    pub fn try_recv(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }

    /// Wait for the next tick. `None` once the task has ended.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.task.abort();
        debug!("tick timer stopped");
    }
}
