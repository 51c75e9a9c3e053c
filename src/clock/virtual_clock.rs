//! Deterministic clock driven by explicit `advance` calls.

use std::time::Duration;

use super::{Clock, Fired, TimerHandle, TimerPurpose, TimerQueue};

/// A clock that only moves when told to.
///
/// `advance` raises the target time; `next_due` then walks `now` forward
/// timer by timer, so anything scheduled while handling a fire is measured
/// from that fire's deadline and not from the end of the advance.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    target: Duration,
    queue: TimerQueue,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the target time forward. Timers become due through `next_due`.
    pub fn advance(&mut self, by: Duration) {
        self.target += by;
    }

    /// Number of pending timers.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_repeating(&mut self, interval: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.queue.schedule(self.now, interval, Some(interval), purpose)
    }

    fn schedule_once(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.queue.schedule(self.now, delay, None, purpose)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.queue.cancel(handle)
    }

    fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.is_pending(handle)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    fn next_due(&mut self) -> Option<Fired> {
        match self.queue.pop_due(self.target) {
            Some(fired) => {
                self.now = self.now.max(fired.deadline);
                Some(fired)
            }
            None => {
                self.now = self.target;
                None
            }
        }
    }
}
