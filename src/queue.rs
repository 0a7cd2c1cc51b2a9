//! Outbound write queue and send throttling.
//!
//! Handlers push command lines onto a shared [`OutboundQueue`]; a single
//! writer pops them and waits on a [`Throttle`] between sends so the
//! connection stays under the service's rate limit.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::{sleep_until, Instant};

#[derive(Debug, Default)]
struct Shared {
    lines: Mutex<VecDeque<String>>,
    notify: Notify,
}

/// FIFO of outbound lines, cheap to clone and share.
///
/// [`push_priority`](Self::push_priority) jumps the queue, for replies such
/// as `PONG` that must not wait behind chat messages.
#[derive(Clone, Debug, Default)]
pub struct OutboundQueue {
    shared: Arc<Shared>,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lines(&self) -> MutexGuard<'_, VecDeque<String>> {
        // No code panics while holding the lock, so a poisoned queue is
        // still consistent.
        self.shared
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, line: impl Into<String>) {
        self.lines().push_back(line.into());
        self.shared.notify.notify_one();
    }

    pub fn push_priority(&self, line: impl Into<String>) {
        self.lines().push_front(line.into());
        self.shared.notify.notify_one();
    }

    /// Take the next line without waiting.
    pub fn try_pop(&self) -> Option<String> {
        self.lines().pop_front()
    }

    /// Wait for and take the next line.
    pub async fn pop(&self) -> String {
        loop {
            let notified = self.shared.notify.notified();
            if let Some(line) = self.try_pop() {
                return line;
            }
            notified.await;
        }
    }

    /// Remove every queued line, returning them in send order.
    pub fn drain(&self) -> Vec<String> {
        self.lines().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// Enforces a minimum delay between consecutive sends.
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait until the next send is allowed and record it.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            sleep_until(last + self.delay).await;
        }
        self.last = Some(Instant::now());
    }

    /// Forget the last send, e.g. after reconnecting.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
