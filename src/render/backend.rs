//! The terminal boundary.
//!
//! [`Backend`] is everything the frame loop needs from a terminal: its size,
//! a way to put cells on it, cursor control and a blocking key read. The real
//! implementation is [`CrosstermBackend`](super::driver::CrosstermBackend);
//! tests use [`TestBackend`](crate::testing::TestBackend).

use super::compositor::CellUpdate;
use crate::error::Result;
use crate::event::InputEvent;

/// Hardware cursor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
}

/// Where the hardware cursor should be after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Hidden,
    Visible { x: i32, y: i32, shape: CursorShape },
}

impl Cursor {
    /// A visible block cursor at (x, y).
    pub fn block(x: i32, y: i32) -> Self {
        Cursor::Visible {
            x,
            y,
            shape: CursorShape::Block,
        }
    }

    /// The cursor position, or `None` when hidden.
    pub fn position(self) -> Option<(i32, i32)> {
        match self {
            Cursor::Hidden => None,
            Cursor::Visible { x, y, .. } => Some((x, y)),
        }
    }
}

/// A character-grid terminal.
pub trait Backend {
    /// Grid dimensions `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Blank the whole grid.
    fn clear(&mut self) -> Result<()>;

    /// Write cells. Output may be buffered until [`flush`](Backend::flush).
    fn draw(&mut self, updates: &[CellUpdate]) -> Result<()>;

    /// Position or hide the hardware cursor.
    fn set_cursor(&mut self, cursor: Cursor) -> Result<()>;

    /// Push buffered output to the terminal.
    fn flush(&mut self) -> Result<()>;

    /// Block until the next input event.
    ///
    /// `Ok(None)` means the event was not one the crate understands and
    /// should be skipped. [`Error::InputClosed`](crate::error::Error::InputClosed)
    /// ends the loop.
    fn read_event(&mut self) -> Result<Option<InputEvent>>;
}
