//! Engine Pipeline
//!
//! Connects the highlight state machine to its hosts.
//!
//! ```text
//! pointer / clock ─► SpotlightEngine ─► CardRow signals ─► paint_cards
//! ```
//!
//! - [`engine`] - `SpotlightEngine`: attach/detach lifecycle, timer pump, pointer routing
//! - [`terminal`] - `TerminalHost`: fullscreen crossterm session around an engine

pub mod engine;
pub mod terminal;

pub use engine::{EnginePhase, SpotlightEngine};
pub use terminal::TerminalHost;
