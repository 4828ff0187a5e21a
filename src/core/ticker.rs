//! Frame ticker: a cancellable periodic task that feeds animation frames to the UI thread.

use std::sync::mpsc::{self, TryRecvError};
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Periodic ticks from a tokio task, received on the UI thread with [`Ticker::poll`].
///
/// Cancelled explicitly with [`Ticker::cancel`] or on drop. Once cancelled no tick is
/// delivered, even if some were already queued.
pub struct Ticker {
    rx: mpsc::Receiver<Instant>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
    period: Duration,
}

impl Ticker {
    /// Spawn the tick task on `handle`. The first tick fires immediately.
    pub fn start(handle: &Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    at = interval.tick() => {
                        if tx.send(at.into_std()).is_err() {
                            break;
                        }
                    }
                }
            }
            log::debug!("Frame ticker stopped");
        });

        log::debug!("Frame ticker started ({} ms)", period.as_millis());
        Self {
            rx,
            cancel,
            task,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Drain queued ticks and return the most recent one, if any.
    pub fn poll(&self) -> Option<Instant> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(at) => latest = Some(at),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    /// Stop the task. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
