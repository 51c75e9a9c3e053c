//! Input Module - crossterm event conversion and polling
//!
//! Bridges crossterm's event stream to the pointer types the engine consumes.
//! Does not route anything itself; the host decides what to do with each
//! [`InputEvent`].
//!
//! # Example
//!
//! ```ignore
//! use spotlight_tui::state::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! loop {
//!     match poll_event(Duration::from_millis(16))? {
//!         Some(InputEvent::Pointer(pointer)) => { /* hit test + engine.pointer_at */ }
//!         Some(InputEvent::Quit) => break,
//!         _ => {}
//!     }
//! }
//! ```

use crossterm::event::{
    poll, read, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;
use std::io::{self, Write};
use std::time::Duration;

use super::pointer::{PointerAction, PointerEvent};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Events a card-row host cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved, pressed, released, dragged or scrolled.
    Pointer(PointerEvent),
    /// Terminal lost focus; the pointer is no longer over any card.
    PointerExit,
    /// Terminal resized (width, height).
    Resize(u16, u16),
    /// q, Escape or Ctrl+C.
    Quit,
    /// Anything else.
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert a crossterm mouse event.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> PointerEvent {
    let action = match event.kind {
        MouseEventKind::Down(_) => PointerAction::Down,
        MouseEventKind::Up(_) => PointerAction::Up,
        MouseEventKind::Drag(_) => PointerAction::Drag,
        MouseEventKind::Moved => PointerAction::Move,
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => PointerAction::Scroll,
    };
    PointerEvent::new(action, event.column, event.row)
}

fn is_quit_key(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => InputEvent::Pointer(convert_mouse_event(mouse)),
        CrosstermEvent::Key(key) if is_quit_key(&key) => InputEvent::Quit,
        CrosstermEvent::FocusLost => InputEvent::PointerExit,
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout. Returns None if nothing arrived.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(read()?)))
    } else {
        Ok(None)
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture and focus reporting.
pub fn enable_mouse<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnableMouseCapture, EnableFocusChange)
}

/// Disable mouse capture and focus reporting.
pub fn disable_mouse<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, DisableFocusChange)
}

// =============================================================================
// TESTS
// =============================================================================
