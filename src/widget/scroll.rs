//! List selection and scroll window state.
//!
//! `ListState` tracks the selected index and the first visible row of a
//! vertical list shown through a window `height` rows tall. Whenever the list
//! is non-empty it keeps `offset <= selected <= offset + height - 1` and
//! `0 <= offset <= max(0, len - height)`.

use std::ops::Range;

/// Selection and scroll position of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    len: usize,
    height: usize,
    selected: usize,
    offset: usize,
}

impl ListState {
    /// State for `len` items seen through `height` rows.
    ///
    /// A zero height is treated as one row.
    pub fn new(len: usize, height: usize) -> Self {
        Self {
            len,
            height: height.max(1),
            selected: 0,
            offset: 0,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Window height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The first visible index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Select `target`, clamped into the list, and scroll the window by the
    /// smallest amount that keeps it visible.
    ///
    /// Returns `false` (changing nothing) when the list is empty.
    pub fn scroll_to(&mut self, target: isize) -> bool {
        if self.is_empty() {
            return false;
        }
        let last = self.len - 1;
        let target = usize::try_from(target.max(0)).unwrap_or(0).min(last);
        if target < self.offset {
            self.offset = target;
        } else if target > self.offset + self.height - 1 {
            self.offset = target + 1 - self.height;
        }
        self.selected = target;
        true
    }

    /// Select the item after the current one.
    pub fn next(&mut self) -> bool {
        self.scroll_to(self.selected as isize + 1)
    }

    /// Select the item before the current one.
    pub fn previous(&mut self) -> bool {
        self.scroll_to(self.selected as isize - 1)
    }

    /// A copy with both invariants re-established.
    pub fn clamped(&self) -> ListState {
        let mut state = *self;
        if state.is_empty() {
            state.selected = 0;
            state.offset = 0;
            return state;
        }
        state.offset = state.offset.min(state.len.saturating_sub(state.height));
        let selected = state.selected.min(state.len - 1);
        state.scroll_to(selected as isize);
        state
    }

    /// Indices of the rows currently in the window.
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.height).min(self.len)
    }

    /// Whether rows exist above the window.
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Whether rows exist below the window.
    pub fn can_scroll_down(&self) -> bool {
        self.offset + self.height < self.len
    }
}

// ===========================================================================
// Tests
// ===========================================================================
