//! Autoplay - Periodic right-to-left rotation of the active card
//!
//! [`AutoplayScheduler`] owns the [`RotationState`] and the one repeating
//! rotation timer. Every tick moves the index one card to the left, wrapping
//! from 0 to N-1, and applies exactly one highlight.
//!
//! - `start` is an idempotent restart: a live timer is cancelled first
//! - `stop` cancels the timer, no-op when already stopped
//! - With no cards, `start` does nothing and the scheduler stays stopped

use std::time::Duration;

use crate::clock::{Clock, TimerHandle, TimerPurpose};

use super::highlight::HighlightApplier;

/// Current index and running flag of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    pub current_index: usize,
    pub running: bool,
}

/// Index the rotation moves to after `index` in a row of `len` cards.
pub fn previous_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index % len + len - 1) % len
}

/// Owner of the repeating rotation timer.
#[derive(Debug)]
pub struct AutoplayScheduler {
    state: RotationState,
    card_count: usize,
    period: Duration,
    timer: Option<TimerHandle>,
}

impl AutoplayScheduler {
    /// Create a stopped scheduler positioned on the last card.
    pub fn new(card_count: usize, period: Duration) -> Self {
        Self {
            state: RotationState {
                current_index: card_count.saturating_sub(1),
                running: false,
            },
            card_count,
            period,
            timer: None,
        }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Check whether `handle` is this scheduler's live rotation timer.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Start (or restart) autoplay, optionally jumping to `from_index` first.
    ///
    /// Returns false when there are no cards to rotate.
    pub fn start<C: Clock + ?Sized>(&mut self, clock: &mut C, from_index: Option<usize>) -> bool {
        if self.card_count == 0 {
            log::debug!("autoplay start ignored: no cards");
            return false;
        }

        if let Some(handle) = self.timer.take() {
            clock.cancel(handle);
        }

        if let Some(index) = from_index {
            self.state.current_index = index % self.card_count;
        }

        self.timer = Some(clock.schedule_repeating(self.period, TimerPurpose::Rotation));
        self.state.running = true;

        log::debug!(
            "autoplay started at card {} (every {:?})",
            self.state.current_index,
            self.period
        );
        true
    }

    /// Stop autoplay. Returns true if it was running.
    pub fn stop<C: Clock + ?Sized>(&mut self, clock: &mut C) -> bool {
        let was_running = self.state.running;
        if let Some(handle) = self.timer.take() {
            clock.cancel(handle);
        }
        self.state.running = false;

        if was_running {
            log::debug!("autoplay stopped at card {}", self.state.current_index);
        }
        was_running
    }

    /// Advance one card to the left and highlight it.
    ///
    /// Returns the new index, or None if the scheduler is not running.
    pub fn tick<A: HighlightApplier + ?Sized>(&mut self, applier: &mut A) -> Option<usize> {
        if !self.state.running || self.card_count == 0 {
            log::warn!("rotation tick while stopped, ignoring");
            return None;
        }

        let next = previous_index(self.state.current_index, self.card_count);
        self.state.current_index = next;
        applier.apply(next);

        log::trace!("rotation tick -> card {}", next);
        Some(next)
    }

    /// Shrink the card set. Dropping to zero stops the scheduler for good.
    pub fn set_card_count<C: Clock + ?Sized>(&mut self, clock: &mut C, card_count: usize) {
        if card_count == 0 {
            self.stop(clock);
            self.card_count = 0;
            self.state.current_index = 0;
            return;
        }

        self.card_count = card_count;
        self.state.current_index %= card_count;
    }
}
