//! Crossterm terminal backend.
//!
//! [`CrosstermBackend`] wraps a buffered stdout writer. It does not touch the
//! terminal mode on creation; call [`enter`](CrosstermBackend::enter) to switch
//! to the alternate screen and raw mode. Dropping the backend restores the
//! terminal if `leave` was not called.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{self, SetCursorStyle},
    event, execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::backend::{Backend, Cursor, CursorShape};
use super::compositor::CellUpdate;
use super::strip::CellStyle;
use crate::error::Result;
use crate::event::InputEvent;

// ---------------------------------------------------------------------------
// CrosstermBackend
// ---------------------------------------------------------------------------

/// Terminal backend using crossterm.
pub struct CrosstermBackend {
    writer: BufWriter<Stdout>,
    active: bool,
}

impl CrosstermBackend {
    /// Create a backend wrapping stdout.
    pub fn new() -> Self {
        Self {
            writer: BufWriter::new(io::stdout()),
            active: false,
        }
    }

    /// Enter the alternate screen and enable raw mode.
    pub fn enter(&mut self) -> Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.active = true;
        Ok(())
    }

    /// Restore the cursor, disable raw mode and leave the alternate screen.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(
            self.writer,
            SetCursorStyle::DefaultUserShape,
            cursor::Show,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Whether the terminal is in the alternate screen.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Queue crossterm attribute commands for a `CellStyle`.
    fn apply_cell_style(&mut self, style: CellStyle) -> io::Result<()> {
        if style.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.writer, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, updates: &[CellUpdate]) -> Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(update.cell.style)?;
            queue!(
                self.writer,
                Print(update.cell.ch),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        match cursor {
            Cursor::Hidden => queue!(self.writer, cursor::Hide)?,
            Cursor::Visible { x, y, shape } => {
                let style = match shape {
                    CursorShape::Block => SetCursorStyle::SteadyBlock,
                    CursorShape::Underline => SetCursorStyle::SteadyUnderScore,
                };
                let x = u16::try_from(x.max(0)).unwrap_or(u16::MAX);
                let y = u16::try_from(y.max(0)).unwrap_or(u16::MAX);
                queue!(self.writer, style, cursor::MoveTo(x, y), cursor::Show)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(InputEvent::from_crossterm(event::read()?))
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
