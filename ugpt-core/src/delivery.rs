//! Single-shot delayed delivery on the tokio runtime
//!
//! Used for the simulated reply latency and the simulated sign-in delay.
//! Values travel over an internal channel so the UI loop can poll for them
//! between frames without blocking.

use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Half-open millisecond range `[min, max)` a delay is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// Returns `None` when `min_ms > max_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Option<Self> {
        (min_ms <= max_ms).then_some(Self { min_ms, max_ms })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Draw a delay uniformly from the range. A degenerate range yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min_ms == self.max_ms {
            return self.min();
        }
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: crate::config::defaults::REPLY_MIN_DELAY_MS,
            max_ms: crate::config::defaults::REPLY_MAX_DELAY_MS,
        }
    }
}

/// Holds at most one outstanding timer. Scheduling again replaces it.
pub struct Delayed<T> {
    tx: mpsc::UnboundedSender<T>,
    rx: mpsc::UnboundedReceiver<T>,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Default for Delayed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Delayed<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            timer: None,
        }
    }

    /// Deliver `value` once `delay` has elapsed. Must be called inside a
    /// tokio runtime.
    pub fn schedule(&mut self, value: T, delay: Duration) {
        self.cancel();
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling delayed delivery");
        let tx = self.tx.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Abort the outstanding timer and drop anything delivered but unread.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                debug!("Cancelling outstanding delivery");
            }
            timer.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    /// True while a scheduled value has not been received yet
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Non-blocking poll for a delivered value
    pub fn try_recv(&mut self) -> Option<T> {
        let value = self.rx.try_recv().ok()?;
        self.timer = None;
        Some(value)
    }

    /// Wait for the next delivered value
    pub async fn recv(&mut self) -> Option<T> {
        let value = self.rx.recv().await?;
        self.timer = None;
        Some(value)
    }
}

impl<T> Drop for Delayed<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
