//! Card renderer.
//!
//! Paints the card row with crossterm commands queued into any `Write` sink,
//! then flushes once. The renderer is blind: it draws whatever [`CardStyle`]
//! each card carries and knows nothing about timers or rotation.
//!
//! [`CardStyle`]: crate::types::CardStyle

mod card_painter;

pub use card_painter::{fit_centered, paint_cards, CardContent};
