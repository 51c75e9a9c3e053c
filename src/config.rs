//! Engine configuration.
//!
//! Timing defaults match the landing page the engine was lifted from:
//! a new card every 3 seconds, and half a second of grace after the pointer
//! leaves before autoplay picks up again. Rotation direction is fixed
//! (right to left) and deliberately has no knob.

use std::time::Duration;

use crate::error::{Result, SpotlightError};
use crate::types::Rgb;

/// Period between two autoplay ticks.
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_millis(3000);

/// Delay after a pointer leave before autoplay may resume.
pub const DEFAULT_RESUME_GRACE: Duration = Duration::from_millis(500);

/// Configuration for a [`SpotlightEngine`](crate::pipeline::SpotlightEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotlightConfig {
    /// Interval of the repeating rotation timer.
    pub rotation_period: Duration,
    /// One-shot debounce delay between a leave and the resume.
    pub resume_grace: Duration,
    /// Color renderers use for the highlighted card.
    pub accent: Rgb,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            rotation_period: DEFAULT_ROTATION_PERIOD,
            resume_grace: DEFAULT_RESUME_GRACE,
            accent: Rgb::ACCENT,
        }
    }
}

impl SpotlightConfig {
    pub fn with_rotation_period(mut self, period: Duration) -> Self {
        self.rotation_period = period;
        self
    }

    pub fn with_resume_grace(mut self, grace: Duration) -> Self {
        self.resume_grace = grace;
        self
    }

    pub fn with_accent(mut self, accent: Rgb) -> Self {
        self.accent = accent;
        self
    }

    /// Reject intervals the clock cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.rotation_period.is_zero() {
            return Err(SpotlightError::ZeroInterval {
                name: "rotation_period",
            });
        }
        if self.resume_grace.is_zero() {
            return Err(SpotlightError::ZeroInterval {
                name: "resume_grace",
            });
        }
        Ok(())
    }
}
