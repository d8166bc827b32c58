//! In-memory backend with scripted input.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::event::{InputEvent, KeyEvent};
use crate::render::{Backend, CellUpdate, Compositor, Cursor};

// ---------------------------------------------------------------------------
// TestBackend
// ---------------------------------------------------------------------------

/// A [`Backend`] that draws into a [`Compositor`] and reads events from a
/// queue. Reading from an empty queue reports [`Error::InputClosed`].
#[derive(Debug)]
pub struct TestBackend {
    grid: Compositor,
    cursor: Cursor,
    events: VecDeque<InputEvent>,
    clears: usize,
    flushes: usize,
    last_batch: usize,
}

impl TestBackend {
    /// A blank `width` x `height` terminal with no queued input.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid: Compositor::new(width, height),
            cursor: Cursor::Hidden,
            events: VecDeque::new(),
            clears: 0,
            flushes: 0,
            last_batch: 0,
        }
    }

    /// Queue an input event.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue a key press.
    pub fn push_key(&mut self, key: KeyEvent) {
        self.push_event(InputEvent::Key(key));
    }

    /// Number of queued events not yet read.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// What the terminal shows.
    pub fn grid(&self) -> &Compositor {
        &self.grid
    }

    /// Row `y` with trailing spaces removed.
    pub fn row(&self, y: u16) -> String {
        self.grid
            .row_text(y)
            .map(|row| row.trim_end().to_owned())
            .unwrap_or_default()
    }

    /// The cursor last set.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// How many times the terminal was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// How many times output was flushed.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Number of cells in the last `draw` call.
    pub fn last_batch(&self) -> usize {
        self.last_batch
    }
}

impl Backend for TestBackend {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.grid.width, self.grid.height))
    }

    fn clear(&mut self) -> Result<()> {
        self.grid.clear();
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, updates: &[CellUpdate]) -> Result<()> {
        self.grid.apply(updates);
        self.last_batch = updates.len();
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        self.cursor = cursor;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        self.events.pop_front().map(Some).ok_or(Error::InputClosed)
    }
}
