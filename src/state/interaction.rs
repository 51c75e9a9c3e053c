//! Interaction - Pointer override of the rotation
//!
//! Entering a card stops autoplay and highlights that card at once. Leaving
//! arms a one-shot grace timer; if nothing re-enters before it fires, autoplay
//! resumes from the card that was last touched, not from wherever the rotation
//! happened to stop.
//!
//! At most one grace timer is live. A new leave replaces the pending one.

use std::time::Duration;

use crate::clock::{Clock, TimerHandle, TimerPurpose};

use super::highlight::HighlightApplier;
use super::rotation::AutoplayScheduler;

/// Hover flag plus the sticky last-touched card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovering: bool,
    /// Survives leave events until the next enter overwrites it.
    pub last_interacted: Option<usize>,
}

/// Tracks pointer enter/leave across every card and owns the resume debounce.
#[derive(Debug)]
pub struct InteractionTracker {
    state: InteractionState,
    grace: Duration,
    debounce: Option<TimerHandle>,
}

impl InteractionTracker {
    pub fn new(grace: Duration) -> Self {
        Self {
            state: InteractionState::default(),
            grace,
            debounce: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state.hovering
    }

    pub fn last_interacted(&self) -> Option<usize> {
        self.state.last_interacted
    }

    pub fn has_pending_resume(&self) -> bool {
        self.debounce.is_some()
    }

    /// Check whether `handle` is the live resume debounce.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.debounce == Some(handle)
    }

    /// Pointer entered card `index`.
    pub fn on_enter<C, A>(
        &mut self,
        index: usize,
        scheduler: &mut AutoplayScheduler,
        clock: &mut C,
        applier: &mut A,
    ) where
        C: Clock + ?Sized,
        A: HighlightApplier + ?Sized,
    {
        let card_count = scheduler.card_count();
        if card_count == 0 {
            log::warn!("enter on card {} ignored: no cards", index);
            return;
        }
        let index = index % card_count;

        self.state.hovering = true;
        self.state.last_interacted = Some(index);
        self.cancel_pending(clock);
        scheduler.stop(clock);

        // Takes effect now, not on the next tick boundary
        applier.apply(index);

        log::debug!("pointer entered card {}", index);
    }

    /// Pointer left card `index`. Arms (or re-arms) the resume debounce.
    pub fn on_leave<C>(&mut self, index: usize, scheduler: &AutoplayScheduler, clock: &mut C)
    where
        C: Clock + ?Sized,
    {
        if scheduler.card_count() == 0 {
            log::warn!("leave on card {} ignored: no cards", index);
            return;
        }

        self.state.hovering = false;
        self.cancel_pending(clock);
        self.debounce = Some(clock.schedule_once(self.grace, TimerPurpose::ResumeDebounce));

        log::debug!("pointer left card {}, resume in {:?}", index, self.grace);
    }

    /// The resume debounce fired. Returns true if autoplay restarted.
    pub fn on_resume_due<C>(
        &mut self,
        handle: TimerHandle,
        scheduler: &mut AutoplayScheduler,
        clock: &mut C,
    ) -> bool
    where
        C: Clock + ?Sized,
    {
        if !self.owns(handle) {
            log::warn!("stale resume timer {:?} ignored", handle);
            return false;
        }
        self.debounce = None;

        if self.state.hovering {
            return false;
        }

        let resume_index = self
            .state
            .last_interacted
            .unwrap_or_else(|| scheduler.current_index());

        log::debug!("grace elapsed, resuming autoplay from card {}", resume_index);
        scheduler.start(clock, Some(resume_index))
    }

    /// Cancel the pending resume, if any.
    pub fn cancel_pending<C: Clock + ?Sized>(&mut self, clock: &mut C) {
        if let Some(handle) = self.debounce.take() {
            clock.cancel(handle);
        }
    }

    /// Follow a shrinking card set.
    pub fn set_card_count<C: Clock + ?Sized>(&mut self, clock: &mut C, card_count: usize) {
        if card_count == 0 {
            self.cancel_pending(clock);
            self.state = InteractionState::default();
            return;
        }
        self.state.last_interacted = self.state.last_interacted.map(|i| i % card_count);
    }
}
