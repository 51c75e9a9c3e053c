//! Terminal host - Runs a card row in a live fullscreen terminal.
//!
//! Glue between crossterm and the engine:
//! 1. Lay out cards with taffy, build the pointer hit grid from the same rects
//! 2. Poll input no longer than the next timer deadline
//! 3. Route pointer moves through the hit grid into the engine
//! 4. Pump due timers, repaint only when a card style changed
//!
//! # Example
//!
//! ```ignore
//! use spotlight_tui::pipeline::TerminalHost;
//! use spotlight_tui::{CardContent, SpotlightConfig};
//!
//! let mut host = TerminalHost::mount(cards, SpotlightConfig::default())?;
//! host.run()?;   // Blocks until q / Esc / Ctrl+C
//! host.unmount()?;
//! ```

use std::cell::Cell;
use std::io::{self, stdout, Stdout, Write};
use std::mem;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use crate::clock::SystemClock;
use crate::config::SpotlightConfig;
use crate::error::Result;
use crate::layout::{layout_card_row, CardRowLayout, RowStyle};
use crate::renderer::{paint_cards, CardContent};
use crate::state::highlight::CardRow;
use crate::state::input::{self, InputEvent};
use crate::state::pointer::CardHitGrid;

use super::engine::SpotlightEngine;

/// Longest the host blocks on input when no timer is due sooner (~60fps).
const FRAME_BUDGET: Duration = Duration::from_millis(16);

// =============================================================================
// Terminal Modes
// =============================================================================

/// Terminal modes the host has switched on.
///
/// Each flag is set only after its step succeeded, so `restore` undoes exactly
/// what `enter` managed to do, even when `enter` failed halfway.
#[derive(Debug, Default)]
struct TerminalModes {
    raw: bool,
    alternate_screen: bool,
    mouse: bool,
}

impl TerminalModes {
    fn enter<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        execute!(out, EnterAlternateScreen, Hide)?;
        self.alternate_screen = true;
        input::enable_mouse(out)?;
        self.mouse = true;
        Ok(())
    }

    /// Undo every completed step in reverse order. Reports the first error
    /// but still attempts the remaining steps.
    fn restore<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut result = Ok(());
        if mem::take(&mut self.mouse) {
            result = result.and(input::disable_mouse(out));
        }
        if mem::take(&mut self.alternate_screen) {
            result = result.and(execute!(out, Show, LeaveAlternateScreen));
        }
        if mem::take(&mut self.raw) {
            result = result.and(disable_raw_mode());
        }
        result.and(out.flush())
    }
}

// =============================================================================
// Terminal Host
// =============================================================================

/// Fullscreen terminal session showing one card row.
pub struct TerminalHost {
    engine: SpotlightEngine<SystemClock, CardRow>,
    cards: Vec<CardContent>,
    row_style: RowStyle,
    layout: CardRowLayout,
    grid: CardHitGrid,
    /// Set by the style watcher, cleared after each paint.
    dirty: Rc<Cell<bool>>,
    stop_watch: Option<Box<dyn FnOnce()>>,
    modes: TerminalModes,
    out: Stdout,
    running: bool,
}

impl TerminalHost {
    /// Enter the alternate screen, capture the mouse and attach the engine.
    pub fn mount(cards: Vec<CardContent>, config: SpotlightConfig) -> Result<Self> {
        Self::mount_with_style(cards, config, RowStyle::default())
    }

    /// Mount with custom card geometry.
    ///
    /// If any terminal step fails, the steps already taken are undone before
    /// the error is returned.
    pub fn mount_with_style(
        cards: Vec<CardContent>,
        config: SpotlightConfig,
        row_style: RowStyle,
    ) -> Result<Self> {
        let engine = SpotlightEngine::attach(SystemClock::new(), CardRow::new(cards.len()), config)?;
        let (width, height) = terminal::size()?;

        let dirty = Rc::new(Cell::new(true));
        let flag = dirty.clone();
        let stop_watch = engine.applier().watch(move || flag.set(true));

        // From here on Drop restores the terminal on every error path
        let mut host = Self {
            engine,
            cards,
            row_style,
            layout: CardRowLayout::default(),
            grid: CardHitGrid::new(width, height),
            dirty,
            stop_watch: Some(stop_watch),
            modes: TerminalModes::default(),
            out: stdout(),
            running: true,
        };
        host.modes.enter(&mut host.out)?;
        host.relayout(width, height)?;
        Ok(host)
    }

    pub fn engine(&self) -> &SpotlightEngine<SystemClock, CardRow> {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to end after the current tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    fn relayout(&mut self, width: u16, height: u16) -> Result<()> {
        self.layout = layout_card_row(width, self.cards.len(), &self.row_style)?;
        self.grid = CardHitGrid::from_rects(width, height, &self.layout.rects);
        self.dirty.set(true);
        execute!(self.out, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        self.engine
            .clock()
            .time_until_next()
            .map_or(FRAME_BUDGET, |due| due.min(FRAME_BUDGET))
    }

    fn route(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Pointer(pointer) => {
                let card = self.grid.get(pointer.x, pointer.y);
                self.engine.pointer_at(card);
            }
            InputEvent::PointerExit => self.engine.pointer_exit(),
            InputEvent::Resize(width, height) => self.relayout(width, height)?,
            InputEvent::Quit => self.running = false,
            InputEvent::None => {}
        }
        Ok(())
    }

    fn repaint_if_dirty(&mut self) -> Result<()> {
        if !self.dirty.replace(false) {
            return Ok(());
        }
        paint_cards(
            &mut self.out,
            &self.layout,
            &self.engine.applier().styles(),
            &self.cards,
            self.engine.config().accent,
        )?;
        Ok(())
    }

    /// One iteration: input, timers, paint. Returns false once stopped.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }

        if let Some(event) = input::poll_event(self.poll_timeout())? {
            self.route(event)?;
        }
        self.engine.pump();
        self.repaint_if_dirty()?;

        Ok(self.running)
    }

    /// Run until q, Escape or Ctrl+C.
    pub fn run(&mut self) -> Result<()> {
        while self.tick()? {}
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if let Some(stop) = self.stop_watch.take() {
            stop();
        }
        self.engine.detach();
        self.modes.restore(&mut self.out)
    }

    /// Detach the engine and give the terminal back.
    pub fn unmount(mut self) -> Result<()> {
        self.restore()?;
        Ok(())
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        // Best effort, the terminal may already be gone
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restore_into(modes: &mut TerminalModes) -> String {
        let mut out = Vec::new();
        modes.restore(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_restore_undoes_only_completed_steps() {
        // Mouse capture failed after the alternate screen was entered
        let mut modes = TerminalModes {
            raw: false,
            alternate_screen: true,
            mouse: false,
        };
        let text = restore_into(&mut modes);
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
        assert!(!text.contains("\x1b[?1004l"));
    }

    #[test]
    fn test_restore_releases_mouse_first() {
        let mut modes = TerminalModes {
            raw: false,
            alternate_screen: true,
            mouse: true,
        };
        let text = restore_into(&mut modes);
        let mouse = text.find("\x1b[?1004l").unwrap();
        let screen = text.find("\x1b[?1049l").unwrap();
        assert!(mouse < screen);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut modes = TerminalModes {
            raw: false,
            alternate_screen: true,
            mouse: true,
        };
        restore_into(&mut modes);
        assert!(restore_into(&mut modes).is_empty());
        assert!(restore_into(&mut TerminalModes::default()).is_empty());
    }
}
