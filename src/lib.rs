//! # spotlight-tui
//!
//! Auto-rotating card highlight engine for reactive terminal UIs.
//!
//! A row of statistic cards has exactly one highlighted card at a time. Left
//! alone, the highlight walks right to left every few seconds. Hovering a card
//! takes over at once and stops the walk; half a second after the pointer
//! leaves, autoplay resumes from the card that was last hovered.
//!
//! ## Architecture
//!
//! ```text
//! Clock ─► AutoplayScheduler ─┐
//!                             ├─► HighlightApplier (CardRow signals) ─► renderer
//! Pointer ─► InteractionTracker
//! ```
//!
//! Everything runs on one thread. Timers are cancellable tokens handed out by a
//! [`Clock`]; [`VirtualClock`] makes every schedule reproducible in tests.
//!
//! ## Modules
//!
//! - [`types`] - Card styles (bitflags), rectangles, colors
//! - [`clock`] - Clock trait, timer queue, virtual and system clocks
//! - [`state`] - Highlight sink, rotation, interaction, pointer and input
//! - [`layout`] - Taffy card row layout
//! - [`renderer`] - crossterm card painter
//! - [`pipeline`] - `SpotlightEngine` and the fullscreen `TerminalHost`

pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use clock::{Clock, Fired, SystemClock, TimerHandle, TimerPurpose, VirtualClock};
pub use config::{SpotlightConfig, DEFAULT_RESUME_GRACE, DEFAULT_ROTATION_PERIOD};
pub use error::SpotlightError;
pub use layout::{layout_card_row, CardRowLayout, RowStyle};
pub use pipeline::{EnginePhase, SpotlightEngine, TerminalHost};
pub use renderer::{paint_cards, CardContent};
pub use state::{
    previous_index, AutoplayScheduler, CardHitGrid, CardRow, HighlightApplier, HoverTracker, InteractionState,
    InteractionTracker, PointerEvent, RotationState,
};
