//! Layout Module
//!
//! Card row geometry computed with [Taffy](https://github.com/DioxusLabs/taffy).
//! The same rectangles feed the renderer and the pointer hit grid, so what the
//! user sees is exactly what the pointer can hover.

mod card_row;

pub use card_row::{layout_card_row, CardRowLayout, RowStyle};
