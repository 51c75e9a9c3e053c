//! Error type for spotlight-tui.
//!
//! Engine event handlers never fail; they degrade to no-ops. Errors only come
//! from configuration, card layout, and terminal output.

use std::io;

use thiserror::Error;

/// Errors surfaced by configuration, layout, and rendering.
#[derive(Debug, Error)]
pub enum SpotlightError {
    /// A timer interval of zero would fire forever without advancing time.
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },

    /// Taffy refused to lay out the card row.
    #[error("card layout failed: {0:?}")]
    Layout(taffy::TaffyError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl From<taffy::TaffyError> for SpotlightError {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Layout(err)
    }
}

pub type Result<T> = std::result::Result<T, SpotlightError>;
