//! ScrollBox widget: a titled, scrollable single-select list.

use std::any::Any;

use crate::event::{EventContext, Key};
use crate::geometry::{pad, Region};
use crate::render::{Canvas, CellStyle};
use crate::widget::scroll::ListState;
use crate::widget::traits::Widget;

/// Drawn on the first item row; highlighted while rows exist above.
const UP_INDICATOR: char = '^';
/// Drawn on the last item row; highlighted while rows exist below.
const DOWN_INDICATOR: char = 'v';

// ---------------------------------------------------------------------------
// ScrollBox
// ---------------------------------------------------------------------------

/// A focusable list with a reverse-video title row.
///
/// The rows below the title show a window onto the items, the selected item
/// highlighted. The last column carries the scroll indicators. While the list
/// is in the focused chain, Up and Down move the selection.
pub struct ScrollBox {
    region: Region,
    title: String,
    items: Vec<String>,
    state: ListState,
}

impl ScrollBox {
    /// Create a list occupying `region`; one row goes to the title.
    pub fn new<I, S>(region: Region, title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let rows = (region.height - 1).max(0) as usize;
        Self {
            region,
            title: title.into(),
            state: ListState::new(items.len(), rows),
            items,
        }
    }

    /// The title row text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All items, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Selected index.
    pub fn selected(&self) -> usize {
        self.state.selected()
    }

    /// Selected item, or `None` when the list is empty.
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.state.selected()).map(String::as_str)
    }

    /// First visible index.
    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    /// Selection and window state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Index of the first item equal to `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Select `target`, clamped into the list. Returns `false` when empty.
    ///
    /// Screens call this through
    /// [`Screen::scroll_to`](crate::screen::Screen::scroll_to), which also
    /// fires the change hook.
    pub fn scroll_to(&mut self, target: isize) -> bool {
        self.state.scroll_to(target)
    }

    /// Select the first item equal to `value`. A miss changes nothing.
    pub fn scroll_to_value(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(index) => self.scroll_to(index as isize),
            None => false,
        }
    }
}

impl Widget for ScrollBox {
    fn widget_type(&self) -> &str {
        "ScrollBox"
    }

    fn region(&self) -> Region {
        self.region
    }

    fn render(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let Region { x, y, width, height } = self.region;
        if width <= 0 || height <= 0 {
            return;
        }
        let mut canvas = canvas.sub(self.region);
        canvas.draw_str(x, y, &pad(&self.title, width as usize), CellStyle::REVERSE);

        let rows = height - 1;
        if rows <= 0 {
            return;
        }
        let state = self.state.clamped();
        let text_width = (width - 1).max(0) as usize;
        for row in 0..rows {
            let index = state.offset() + row as usize;
            let text = self.items.get(index).map_or("", String::as_str);
            let style = CellStyle::highlight(index == state.selected() && index < self.items.len());
            canvas.draw_str(x, y + 1 + row, &pad(text, text_width), style);
        }

        let column = x + width - 1;
        canvas.draw_str(
            column,
            y + 1,
            &UP_INDICATOR.to_string(),
            CellStyle::highlight(state.can_scroll_up()),
        );
        if rows > 1 {
            canvas.draw_str(
                column,
                y + rows,
                &DOWN_INDICATOR.to_string(),
                CellStyle::highlight(state.can_scroll_down()),
            );
        }
    }

    fn handle_key(&mut self, key: Key, cx: &mut EventContext) -> bool {
        if !cx.is_focused() {
            return false;
        }
        let moved = match key {
            Key::Down => self.state.next(),
            Key::Up => self.state.previous(),
            _ => return false,
        };
        if moved {
            cx.changed();
        }
        true
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
