//! State Module - The highlight engine's moving parts
//!
//! - **Highlight** - Exclusive active card, signal-backed card row
//! - **Rotation** - Autoplay scheduler and rotation state
//! - **Interaction** - Pointer enter/leave override and resume debounce
//! - **Pointer** - Cell hit testing, hover enter/leave detection
//! - **Input** - crossterm event conversion, mouse capture

pub mod highlight;
pub mod input;
pub mod interaction;
pub mod pointer;
pub mod rotation;

pub use highlight::{CardRow, HighlightApplier};
pub use interaction::{InteractionState, InteractionTracker};
pub use pointer::{CardHitGrid, HoverChange, HoverTracker, PointerAction, PointerEvent};
pub use rotation::{previous_index, AutoplayScheduler, RotationState};
