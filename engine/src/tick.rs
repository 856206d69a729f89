//! Cancellable periodic tick tasks.
//!
//! A [`TickTask`] owns a spawned task that only signals; the owner drains the
//! signals on its own loop and does the actual work there. Aborting the task
//! and dropping the receiver together guarantee no tick is observed after
//! [`TickTask::cancel`] (or drop) returns.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::MissedTickBehavior;

/// Pending signals beyond this are coalesced; the owner only needs to know
/// that at least one tick elapsed.
const TICK_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct TickTask {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl TickTask {
    /// Spawn on the current tokio runtime. The first tick fires immediately.
    #[must_use]
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                match tx.try_send(()) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(())) => {}
                    Err(mpsc::error::TrySendError::Closed(())) => break,
                }
            }
        });
        Self { handle, rx }
    }

    /// Consume every pending tick, returning how many were waiting.
    pub fn drain(&mut self) -> usize {
        let mut pending = 0;
        while self.rx.try_recv().is_ok() {
            pending += 1;
        }
        pending
    }

    /// Handle that observes the task after this `TickTask` is gone.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }

    /// Stop the task. Pending ticks are discarded with the receiver.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.rx.close();
        self.handle.abort();
    }
}
