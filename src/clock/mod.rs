//! Clock - Cancellable timer scheduling
//!
//! The highlight engine never sleeps. It asks a [`Clock`] for timers and the
//! host hands fired timers back through [`Clock::next_due`]. Timers carry a
//! [`TimerPurpose`] instead of a closure, so the engine can route a fire to the
//! right handler without sharing mutable state with the clock.
//!
//! - [`VirtualClock`] - deterministic, advanced by hand (tests, replays)
//! - [`SystemClock`] - monotonic wall clock for live terminals
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use spotlight_tui::clock::{Clock, TimerPurpose, VirtualClock};
//!
//! let mut clock = VirtualClock::new();
//! let handle = clock.schedule_once(Duration::from_millis(500), TimerPurpose::ResumeDebounce);
//!
//! clock.advance(Duration::from_millis(499));
//! assert!(clock.next_due().is_none());
//!
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(clock.next_due().map(|fired| fired.handle), Some(handle));
//! ```

mod queue;
mod system;
mod virtual_clock;

use std::time::Duration;

pub use queue::TimerQueue;
pub use system::SystemClock;
pub use virtual_clock::VirtualClock;

/// Opaque token for a scheduled timer, repeating or one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub(crate) const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// What a timer is for. The engine owns at most one live timer per purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    /// Repeating autoplay tick.
    Rotation,
    /// One-shot grace period before autoplay resumes.
    ResumeDebounce,
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub purpose: TimerPurpose,
    /// Clock time the timer was due at.
    pub deadline: Duration,
}

/// Scheduling capability consumed by the engine.
///
/// Times are durations since the clock's own origin. Cancelling a handle that
/// already fired (one-shot) or was already cancelled is a no-op returning `false`.
pub trait Clock {
    /// Current clock time.
    fn now(&self) -> Duration;

    /// Fire every `interval`, first at `now + interval`, until cancelled.
    fn schedule_repeating(&mut self, interval: Duration, purpose: TimerPurpose) -> TimerHandle;

    /// Fire once at `now + delay`.
    fn schedule_once(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle;

    /// Cancel a timer. Returns true if it was still pending.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Check if a timer is still scheduled.
    fn is_pending(&self, handle: TimerHandle) -> bool;

    /// Deadline of the earliest pending timer.
    fn next_deadline(&self) -> Option<Duration>;

    /// Pop the earliest timer that is due, in deadline order.
    fn next_due(&mut self) -> Option<Fired>;
}
