//! Deadline-ordered timer queue shared by every clock implementation.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::{Fired, TimerHandle, TimerPurpose};

#[derive(Debug, Clone, Copy)]
struct Timer {
    purpose: TimerPurpose,
    /// Some for repeating timers.
    interval: Option<Duration>,
}

/// Pending timers keyed by `(deadline, id)`.
///
/// Ties on the deadline resolve in scheduling order because ids only grow.
/// Repeating timers keep their id across re-arms, so their handle stays valid.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<(Duration, u64), Timer>,
    deadlines: HashMap<u64, Duration>,
    skip_missed: bool,
}

impl TimerQueue {
    /// Queue that fires every missed repeat after a stall, one by one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue that fires a late repeating timer once, then realigns it to the
    /// first period boundary after `now`.
    pub fn skipping_missed() -> Self {
        Self {
            skip_missed: true,
            ..Self::default()
        }
    }

    /// Schedule a timer at `now + delay`, re-arming every `interval` if given.
    pub fn schedule(
        &mut self,
        now: Duration,
        delay: Duration,
        interval: Option<Duration>,
        purpose: TimerPurpose,
    ) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let deadline = now + delay;
        self.pending.insert((deadline, id), Timer { purpose, interval });
        self.deadlines.insert(id, deadline);

        TimerHandle::from_raw(id)
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.raw()) {
            Some(deadline) => {
                self.pending.remove(&(deadline, handle.raw()));
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.raw())
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired> {
        let (deadline, id) = *self.pending.keys().next()?;
        if deadline > now {
            return None;
        }

        let timer = self.pending.remove(&(deadline, id))?;
        self.deadlines.remove(&id);

        // Re-arm on the original period grid, not from `now`
        if let Some(interval) = timer.interval {
            let mut next = deadline + interval;
            if self.skip_missed && next <= now && !interval.is_zero() {
                let periods = (now - deadline).as_nanos() / interval.as_nanos() + 1;
                let skipped = periods - 1;
                next = u32::try_from(periods)
                    .ok()
                    .and_then(|periods| interval.checked_mul(periods))
                    .and_then(|offset| deadline.checked_add(offset))
                    .unwrap_or(Duration::MAX);
                log::debug!("{:?} timer skipped {} missed repeats", timer.purpose, skipped);
            }
            self.pending.insert((next, id), timer);
            self.deadlines.insert(id, next);
        }

        Some(Fired {
            handle: TimerHandle::from_raw(id),
            purpose: timer.purpose,
            deadline,
        })
    }
}
