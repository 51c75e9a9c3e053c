//! Pointer Module - Cell-to-card hit testing and hover tracking
//!
//! The terminal only reports pointer positions. [`CardHitGrid`] answers "which
//! card is under this cell" in O(1), and [`HoverTracker`] turns a stream of
//! positions into enter/leave pairs, firing each exactly once per change.
//!
//! # Example
//!
//! ```
//! use spotlight_tui::state::{CardHitGrid, HoverTracker};
//! use spotlight_tui::CardRect;
//!
//! let grid = CardHitGrid::from_rects(20, 5, &[CardRect::new(0, 0, 10, 5), CardRect::new(10, 0, 10, 5)]);
//! let mut hover = HoverTracker::new();
//!
//! let change = hover.update(grid.get(12, 2));
//! assert_eq!(change.entered, Some(1));
//! assert_eq!(change.left, None);
//! ```

use crate::types::CardRect;

// =============================================================================
// POINTER EVENT
// =============================================================================

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Move,
    Down,
    Up,
    Drag,
    Scroll,
}

/// Pointer position in terminal cells (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: u16, y: u16) -> Self {
        Self { action, x, y }
    }

    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Move, x, y)
    }
}

// =============================================================================
// HIT GRID - O(1) Cell to Card Lookup
// =============================================================================

const EMPTY: usize = usize::MAX;

/// Grid of card indices, one entry per terminal cell.
#[derive(Debug, Clone)]
pub struct CardHitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl CardHitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid with card `i` covering `rects[i]`.
    pub fn from_rects(width: u16, height: u16, rects: &[CardRect]) -> Self {
        let mut grid = Self::new(width, height);
        for (index, rect) in rects.iter().enumerate() {
            grid.fill_rect(*rect, index);
        }
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, EMPTY);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Claim a rectangle for a card. Cells outside the grid are skipped.
    pub fn fill_rect(&mut self, rect: CardRect, index: usize) {
        for dy in 0..rect.height {
            let Some(cy) = rect.y.checked_add(dy).filter(|cy| *cy < self.height) else {
                break;
            };
            for dx in 0..rect.width {
                let Some(cx) = rect.x.checked_add(dx).filter(|cx| *cx < self.width) else {
                    break;
                };
                let idx = cy as usize * self.width as usize + cx as usize;
                self.cells[idx] = index;
            }
        }
    }

    /// Card under a cell, if any.
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        match self.cells.get(idx).copied() {
            Some(EMPTY) | None => None,
            Some(index) => Some(index),
        }
    }
}

// =============================================================================
// HOVER TRACKING
// =============================================================================

/// Result of one hover update. Leave always precedes enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverChange {
    pub left: Option<usize>,
    pub entered: Option<usize>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Remembers the hovered card between pointer updates.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Record the card now under the pointer.
    pub fn update(&mut self, card: Option<usize>) -> HoverChange {
        if card == self.hovered {
            return HoverChange::default();
        }
        let change = HoverChange {
            left: self.hovered,
            entered: card,
        };
        self.hovered = card;
        change
    }

    /// Forget the hovered card without producing a leave.
    pub fn reset(&mut self) {
        self.hovered = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
