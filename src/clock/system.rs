//! Monotonic wall clock for live hosts.

use std::time::{Duration, Instant};

use super::{Clock, Fired, TimerHandle, TimerPurpose, TimerQueue};

/// Clock backed by [`Instant`]. Time zero is the moment the clock was created.
///
/// After a stall (a suspended process, a blocked host) a repeating timer fires
/// once and then realigns to its period grid; missed repeats are dropped.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    queue: TimerQueue,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::skipping_missed(),
        }
    }

    /// How long the host may block before the next timer is due.
    ///
    /// Returns `None` when nothing is scheduled.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now()))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule_repeating(&mut self, interval: Duration, purpose: TimerPurpose) -> TimerHandle {
        let now = self.now();
        self.queue.schedule(now, interval, Some(interval), purpose)
    }

    fn schedule_once(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        let now = self.now();
        self.queue.schedule(now, delay, None, purpose)
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
        let now = self.now();
        self.queue.pop_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_timer_not_due() {
        let mut clock = SystemClock::new();
        let handle = clock.schedule_once(Duration::from_secs(3600), TimerPurpose::ResumeDebounce);
        assert!(clock.next_due().is_none());
        assert!(clock.is_pending(handle));
        assert!(clock.time_until_next().unwrap() > Duration::from_secs(3000));
    }

    #[test]
    fn test_stalled_repeat_fires_once() {
        let mut clock = SystemClock::new();
        clock.schedule_repeating(Duration::from_millis(50), TimerPurpose::Rotation);
        std::thread::sleep(Duration::from_millis(170));

        assert!(clock.next_due().is_some());
        assert!(clock.next_due().is_none());
    }

    #[test]
    fn test_short_timer_fires() {
        let mut clock = SystemClock::new();
        let handle = clock.schedule_once(Duration::from_millis(5), TimerPurpose::ResumeDebounce);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.next_due().map(|fired| fired.handle), Some(handle));
        assert!(clock.time_until_next().is_none());
    }
}
