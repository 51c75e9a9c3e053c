//! Spotlight Engine - Lifecycle and timer dispatch
//!
//! One engine instance owns the clock, the highlight sink, the autoplay
//! scheduler and the interaction tracker. Handlers are plain methods on
//! `&mut self`; the host calls them in event-arrival order and each runs to
//! completion, so nothing needs a lock.
//!
//! ```text
//! pointer ─► on_enter/on_leave ─► InteractionTracker ─► AutoplayScheduler.stop/start
//!                                        │                      │
//! clock ─► pump ─► ResumeDebounce ───────┘        Rotation ─► tick
//!                                                               │
//!                          HighlightApplier.apply ◄─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use spotlight_tui::{CardRow, SpotlightConfig, SpotlightEngine, VirtualClock};
//!
//! let mut engine =
//!     SpotlightEngine::attach(VirtualClock::new(), CardRow::new(4), SpotlightConfig::default())?;
//! assert_eq!(engine.active_index(), Some(3));
//!
//! engine.advance(Duration::from_millis(3000));
//! assert_eq!(engine.active_index(), Some(2));
//!
//! engine.on_enter(0);
//! assert_eq!(engine.active_index(), Some(0));
//! assert!(!engine.is_running());
//! # Ok::<(), spotlight_tui::SpotlightError>(())
//! ```

use std::time::Duration;

use crate::clock::{Clock, Fired, TimerPurpose, VirtualClock};
use crate::config::SpotlightConfig;
use crate::error::Result;
use crate::state::highlight::HighlightApplier;
use crate::state::interaction::{InteractionState, InteractionTracker};
use crate::state::pointer::HoverTracker;
use crate::state::rotation::{AutoplayScheduler, RotationState};

// =============================================================================
// Engine Phase
// =============================================================================

/// Coarse state of the engine as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Autoplay running, no resume pending.
    Rotating,
    /// Autoplay stopped by the pointer, or a resume is pending.
    Interacted,
    /// Attached to zero cards. Nothing will ever be highlighted.
    Inert,
    /// Detached. Every timer is cancelled and events are ignored.
    Detached,
}

// =============================================================================
// Engine
// =============================================================================

/// Auto-rotating highlight over a fixed row of cards.
pub struct SpotlightEngine<C: Clock, A: HighlightApplier> {
    clock: C,
    applier: A,
    config: SpotlightConfig,
    scheduler: AutoplayScheduler,
    tracker: InteractionTracker,
    hover: HoverTracker,
    /// Last index handed to the applier.
    displayed: Option<usize>,
    attached: bool,
}

impl<C: Clock, A: HighlightApplier> SpotlightEngine<C, A> {
    /// Attach to the applier's cards and start autoplay from the last card.
    ///
    /// With zero cards the engine is created inert: nothing is scheduled and
    /// the applier is never called.
    pub fn attach(clock: C, applier: A, config: SpotlightConfig) -> Result<Self> {
        config.validate()?;

        let card_count = applier.card_count();
        let mut engine = Self {
            clock,
            applier,
            config,
            scheduler: AutoplayScheduler::new(card_count, config.rotation_period),
            tracker: InteractionTracker::new(config.resume_grace),
            hover: HoverTracker::new(),
            displayed: None,
            attached: true,
        };

        if card_count == 0 {
            log::debug!("attached to an empty card row, engine is inert");
            return Ok(engine);
        }

        let initial = engine.scheduler.current_index();
        engine.applier.apply(initial);
        engine.displayed = Some(initial);
        engine.scheduler.start(&mut engine.clock, None);

        log::debug!("attached to {} cards", card_count);
        Ok(engine)
    }

    /// Cancel every timer and stop producing effects. Safe to call twice.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.scheduler.stop(&mut self.clock);
        self.tracker.cancel_pending(&mut self.clock);
        self.hover.reset();
        self.attached = false;

        log::debug!("detached");
    }

    // -------------------------------------------------------------------------
    // Pointer events
    // -------------------------------------------------------------------------

    /// Pointer entered card `index`.
    pub fn on_enter(&mut self, index: usize) {
        if !self.attached {
            log::warn!("enter on card {} after detach ignored", index);
            return;
        }
        self.tracker
            .on_enter(index, &mut self.scheduler, &mut self.clock, &mut self.applier);
        if self.scheduler.card_count() > 0 {
            self.displayed = self.tracker.last_interacted();
        }
    }

    /// Pointer left card `index`.
    pub fn on_leave(&mut self, index: usize) {
        if !self.attached {
            log::warn!("leave on card {} after detach ignored", index);
            return;
        }
        self.tracker.on_leave(index, &self.scheduler, &mut self.clock);
    }

    /// Route a hit-tested pointer position: leave the old card, enter the new one.
    pub fn pointer_at(&mut self, card: Option<usize>) {
        let change = self.hover.update(card);
        if let Some(left) = change.left {
            self.on_leave(left);
        }
        if let Some(entered) = change.entered {
            self.on_enter(entered);
        }
    }

    /// Pointer left the card row entirely (or the terminal lost focus).
    pub fn pointer_exit(&mut self) {
        self.pointer_at(None);
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Dispatch every timer the clock reports as due. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let mut dispatched = 0;
        while let Some(fired) = self.clock.next_due() {
            self.dispatch(fired);
            dispatched += 1;
        }
        dispatched
    }

    fn dispatch(&mut self, fired: Fired) {
        if !self.attached {
            log::error!(
                "{:?} timer {:?} fired after detach: a cancellation was missed",
                fired.purpose,
                fired.handle
            );
            debug_assert!(false, "timer fired after detach");
            return;
        }

        match fired.purpose {
            TimerPurpose::Rotation => {
                if !self.scheduler.owns(fired.handle) {
                    log::warn!("stale rotation timer {:?} ignored", fired.handle);
                    return;
                }
                if let Some(index) = self.scheduler.tick(&mut self.applier) {
                    self.displayed = Some(index);
                }
            }
            TimerPurpose::ResumeDebounce => {
                self.tracker
                    .on_resume_due(fired.handle, &mut self.scheduler, &mut self.clock);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Card set
    // -------------------------------------------------------------------------

    /// Shrink the card set to `len` cards. Growing is not supported.
    ///
    /// Dropping to zero stops everything and leaves the engine inert. Otherwise
    /// indices wrap into the smaller set and, if the highlighted card was
    /// removed, the highlight moves to its wrapped position. Ignored after detach.
    pub fn truncate_cards(&mut self, len: usize) {
        if !self.attached {
            log::warn!("truncate to {} cards after detach ignored", len);
            return;
        }
        let card_count = self.scheduler.card_count();
        if len >= card_count {
            if len > card_count {
                log::warn!("card set can only shrink ({} -> {} ignored)", card_count, len);
            }
            return;
        }

        self.applier.truncate(len);
        self.scheduler.set_card_count(&mut self.clock, len);
        self.tracker.set_card_count(&mut self.clock, len);
        if self.hover.hovered().is_some_and(|card| card >= len) {
            self.hover.reset();
        }

        if len == 0 {
            self.displayed = None;
            log::debug!("card set emptied, engine is inert");
            return;
        }

        if let Some(displayed) = self.displayed.filter(|d| *d >= len) {
            let index = displayed % len;
            self.applier.apply(index);
            self.displayed = Some(index);
        }
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> EnginePhase {
        if !self.attached {
            EnginePhase::Detached
        } else if self.scheduler.card_count() == 0 {
            EnginePhase::Inert
        } else if self.scheduler.is_running() && !self.tracker.has_pending_resume() {
            EnginePhase::Rotating
        } else {
            EnginePhase::Interacted
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn card_count(&self) -> usize {
        self.scheduler.card_count()
    }

    /// Rotation cursor. Differs from `active_index` while the pointer overrides it.
    pub fn current_index(&self) -> usize {
        self.scheduler.current_index()
    }

    /// Card most recently handed to the applier.
    pub fn active_index(&self) -> Option<usize> {
        self.displayed
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn is_hovering(&self) -> bool {
        self.tracker.is_hovering()
    }

    pub fn last_interacted(&self) -> Option<usize> {
        self.tracker.last_interacted()
    }

    pub fn has_pending_resume(&self) -> bool {
        self.tracker.has_pending_resume()
    }

    pub fn hovered_card(&self) -> Option<usize> {
        self.hover.hovered()
    }

    pub fn rotation_state(&self) -> RotationState {
        self.scheduler.state()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.tracker.state()
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<A: HighlightApplier> SpotlightEngine<VirtualClock, A> {
    /// Move virtual time forward and dispatch whatever became due.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.clock.advance(by);
        self.pump()
    }
}

impl<C: Clock, A: HighlightApplier> Drop for SpotlightEngine<C, A> {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// Tests
// =============================================================================
