//! Core types for spotlight-tui.
//!
//! These types flow from the highlight engine into layout and rendering.
//! They describe what a card looks like, not when it changes.

// =============================================================================
// Color
// =============================================================================

/// Opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accent used for the highlighted card border and glow.
    pub const ACCENT: Self = Self::new(0, 168, 232);

    /// Resting border color (gray-500 at half strength over dark background).
    pub const MUTED: Self = Self::new(107, 114, 128);

    pub const WHITE: Self = Self::new(255, 255, 255);
}

// =============================================================================
// Card Style (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Visual facets of a single card.
    ///
    /// A highlighted card carries every facet at once; a resting card carries none.
    /// Renderers pick the facets they can express (a terminal cannot scale, but it
    /// can lift a box by one row).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct CardStyle: u8 {
        /// Marked as the active card.
        const ACTIVE = 1 << 0;
        /// Lifted and enlarged.
        const ELEVATED = 1 << 1;
        /// Drawn above its neighbours.
        const RAISED = 1 << 2;
        /// Border uses the accent color.
        const ACCENT_BORDER = 1 << 3;
        /// Soft accent shadow around the card.
        const GLOW = 1 << 4;
    }
}

impl CardStyle {
    /// Style of a card that is not highlighted.
    pub const RESTING: Self = Self::empty();

    /// Style of the one highlighted card.
    pub const HIGHLIGHTED: Self = Self::ACTIVE
        .union(Self::ELEVATED)
        .union(Self::RAISED)
        .union(Self::ACCENT_BORDER)
        .union(Self::GLOW);

    /// Check whether this style marks the active card.
    pub fn is_active(self) -> bool {
        self.contains(Self::ACTIVE)
    }
}

// =============================================================================
// Card Rect
// =============================================================================

/// Terminal-cell rectangle occupied by one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CardRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check whether a cell lies inside this rectangle.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
