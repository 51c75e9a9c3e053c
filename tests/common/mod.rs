//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use spotlight_tui::{CardRow, HighlightApplier, SpotlightConfig, SpotlightEngine, VirtualClock};

pub const PERIOD: Duration = Duration::from_millis(3000);
pub const GRACE: Duration = Duration::from_millis(500);

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// CardRow that also remembers every index it was asked to highlight.
pub struct RecordingRow {
    pub row: CardRow,
    pub history: Vec<usize>,
}

impl RecordingRow {
    pub fn new(count: usize) -> Self {
        Self {
            row: CardRow::new(count),
            history: Vec::new(),
        }
    }
}

impl HighlightApplier for RecordingRow {
    fn card_count(&self) -> usize {
        self.row.card_count()
    }

    fn apply(&mut self, index: usize) {
        self.history.push(index);
        self.row.apply(index);
    }

    fn truncate(&mut self, len: usize) {
        self.row.truncate(len);
    }
}

pub type TestEngine = SpotlightEngine<VirtualClock, RecordingRow>;

pub fn attach(cards: usize) -> TestEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    SpotlightEngine::attach(
        VirtualClock::new(),
        RecordingRow::new(cards),
        SpotlightConfig::default(),
    )
    .expect("default config is valid")
}
