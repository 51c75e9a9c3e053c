//! Highlight - Exclusive "active" designation across a fixed card row
//!
//! [`HighlightApplier`] is the only sink the engine writes visual state into.
//! It owns no rotation or interaction state; given an index it makes that card
//! active and every other card resting, and doing so twice changes nothing.
//!
//! [`CardRow`] is the reactive implementation: each card's [`CardStyle`] lives
//! in its own signal, so a renderer effect only wakes for cards that changed.
//!
//! # Example
//!
//! ```
//! use spotlight_tui::state::{CardRow, HighlightApplier};
//! use spotlight_tui::CardStyle;
//!
//! let mut row = CardRow::new(3);
//! row.apply(1);
//! assert_eq!(row.active(), Some(1));
//! assert_eq!(row.style(1), Some(CardStyle::HIGHLIGHTED));
//! assert_eq!(row.style(0), Some(CardStyle::RESTING));
//! ```

use spark_signals::{effect, signal, Signal};

use crate::types::CardStyle;

// =============================================================================
// APPLIER TRAIT
// =============================================================================

/// Sink that renders the highlight decision.
pub trait HighlightApplier {
    /// Number of cards in the row. Fixed at attach time, may only shrink.
    fn card_count(&self) -> usize;

    /// Mark `index` active and every other card inactive. Must be idempotent.
    fn apply(&mut self, index: usize);

    /// Drop every card at or past `len`.
    fn truncate(&mut self, len: usize);
}

// =============================================================================
// CARD ROW
// =============================================================================

/// Signal-backed card row.
pub struct CardRow {
    styles: Vec<Signal<CardStyle>>,
    active: Signal<Option<usize>>,
    apply_count: usize,
}

impl CardRow {
    /// Create a row of `count` resting cards.
    pub fn new(count: usize) -> Self {
        Self {
            styles: (0..count).map(|_| signal(CardStyle::RESTING)).collect(),
            active: signal(None),
            apply_count: 0,
        }
    }

    /// Current style of one card.
    pub fn style(&self, index: usize) -> Option<CardStyle> {
        self.styles.get(index).map(|s| s.get())
    }

    /// Snapshot of every card's style, in row order.
    pub fn styles(&self) -> Vec<CardStyle> {
        self.styles.iter().map(|s| s.get()).collect()
    }

    /// Style signal of one card, for reactive renderers.
    pub fn style_signal(&self, index: usize) -> Option<Signal<CardStyle>> {
        self.styles.get(index).cloned()
    }

    /// Index of the active card, if any.
    pub fn active(&self) -> Option<usize> {
        self.active.get()
    }

    pub fn active_signal(&self) -> Signal<Option<usize>> {
        self.active.clone()
    }

    /// Number of cards currently marked active. Always 0 or 1.
    pub fn active_count(&self) -> usize {
        self.styles.iter().filter(|s| s.get().is_active()).count()
    }

    /// How many times `apply` has been invoked.
    pub fn apply_count(&self) -> usize {
        self.apply_count
    }

    /// Run `on_change` now and again whenever a card style or the active index changes.
    ///
    /// Returns the stop function of the underlying effect. Idempotent applies
    /// write nothing, so they never wake the watcher.
    pub fn watch(&self, mut on_change: impl FnMut() + 'static) -> Box<dyn FnOnce()> {
        let styles = self.styles.clone();
        let active = self.active.clone();
        Box::new(effect(move || {
            for style in &styles {
                style.get();
            }
            active.get();
            on_change();
        }))
    }
}

impl HighlightApplier for CardRow {
    fn card_count(&self) -> usize {
        self.styles.len()
    }

    fn apply(&mut self, index: usize) {
        let len = self.styles.len();
        if len == 0 {
            return;
        }
        let index = index % len;
        self.apply_count += 1;

        for (i, style) in self.styles.iter().enumerate() {
            let wanted = if i == index {
                CardStyle::HIGHLIGHTED
            } else {
                CardStyle::RESTING
            };
            style.set(wanted);
        }
        self.active.set(Some(index));
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.styles.len() {
            return;
        }
        self.styles.truncate(len);
        if self.active.get().is_some_and(|active| active >= len) {
            self.active.set(None);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
