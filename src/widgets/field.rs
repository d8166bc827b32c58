//! LabeledField widget: a `label: value` row with inline editing.
//!
//! The field shows `"<label>:"` followed by its value in reverse video, fitted
//! to the remaining width with [`pad`]. While editing, the insertion point is
//! kept as a signed offset from the end of the value: `0` is the end and
//! `-len` is the start, so `-len <= cursor_offset <= 0` always holds.

use std::any::Any;

use crate::dom::WidgetId;
use crate::event::{EventContext, Key};
use crate::geometry::{pad, strip_markers, ColumnSpan, Region};
use crate::render::{Canvas, CellStyle, Cursor};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// FieldState
// ---------------------------------------------------------------------------

/// Whether the field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Viewing,
    /// Editing; Enter hands focus back to `return_to`.
    Editing { return_to: Option<WidgetId> },
}

// ---------------------------------------------------------------------------
// LabeledField
// ---------------------------------------------------------------------------

/// An editable key/value row.
///
/// Layout inside a parent of region `area`, on relative row `row`, covering
/// `span`:
///
/// - label at `edge(column)`
/// - value at `edge(column) + len(label) + 2`
/// - value width `edge(column + span) - edge(column) - len(label) - 3`
///
/// The label is shown with its `[X]` shortcut marker only while the field or
/// an ancestor holds focus.
pub struct LabeledField {
    region: Region,
    label: String,
    value: String,
    cursor_offset: i32,
    state: FieldState,
}

impl LabeledField {
    /// Create a field on `row` of `area`, covering `span`.
    pub fn new(
        area: Region,
        row: i32,
        span: ColumnSpan,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            region: area.band(row, span, 1),
            label: label.into(),
            value: value.into(),
            cursor_offset: 0,
            state: FieldState::Viewing,
        }
    }

    /// The label, with shortcut markers.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value. The cursor returns to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_offset = 0;
    }

    /// Signed insertion point relative to the end of the value.
    pub fn cursor_offset(&self) -> i32 {
        self.cursor_offset
    }

    /// Viewing or editing.
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Whether the field is in the editing state.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, FieldState::Editing { .. })
    }

    /// Enter the editing state with the cursor at the end of the value.
    ///
    /// Focus is not touched here; see
    /// [`Screen::start_editing`](crate::screen::Screen::start_editing).
    pub fn begin_editing(&mut self, return_to: Option<WidgetId>) {
        self.cursor_offset = 0;
        self.state = FieldState::Editing { return_to };
    }

    /// Column where the value starts.
    pub fn value_x(&self) -> i32 {
        self.region.x + self.label_len()
    }

    /// Cells available to the value.
    pub fn value_width(&self) -> i32 {
        self.region.width - self.label_len() - 1
    }

    fn label_len(&self) -> i32 {
        self.label.chars().count() as i32 + 2
    }

    fn len(&self) -> i32 {
        self.value.chars().count() as i32
    }

    /// Byte index of the character at `index` (chars), or the end.
    fn byte_index(&self, index: i32) -> usize {
        self.value
            .char_indices()
            .nth(index.max(0) as usize)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn backspace(&mut self) -> bool {
        let index = self.len() + self.cursor_offset - 1;
        if self.value.is_empty() || index < 0 {
            return false;
        }
        let at = self.byte_index(index);
        self.value.remove(at);
        true
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.len() + self.cursor_offset);
        self.value.insert(at, ch);
    }

    fn move_cursor(&mut self, delta: i32) {
        self.cursor_offset = (self.cursor_offset + delta).clamp(-self.len(), 0);
    }
}

impl Widget for LabeledField {
    fn widget_type(&self) -> &str {
        "LabeledField"
    }

    fn region(&self) -> Region {
        self.region
    }

    fn render(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let label = if focused {
            self.label.clone()
        } else {
            strip_markers(&self.label)
        };
        let y = self.region.y;
        canvas.draw_str(self.region.x, y, &format!("{label}:"), CellStyle::NORMAL);
        let width = self.value_width().max(0) as usize;
        canvas.draw_str(self.value_x(), y, &pad(&self.value, width), CellStyle::REVERSE);
    }

    fn handle_key(&mut self, key: Key, cx: &mut EventContext) -> bool {
        let FieldState::Editing { return_to } = self.state else {
            return false;
        };
        match key {
            Key::Backspace => {
                if self.backspace() {
                    cx.changed();
                }
            }
            Key::Left => self.move_cursor(-1),
            Key::Right => self.move_cursor(1),
            Key::Home => self.cursor_offset = -self.len(),
            Key::End => self.cursor_offset = 0,
            Key::Enter => cx.focus(return_to),
            Key::Char(ch) if key.is_printable() => {
                self.insert(ch);
                cx.changed();
            }
            _ => return false,
        }
        true
    }

    fn on_blur(&mut self) {
        self.state = FieldState::Viewing;
    }

    /// Block cursor near the middle of the padded value, shifted by the
    /// cursor offset.
    fn cursor(&self) -> Cursor {
        let x = self.value_x() + (self.value_width() + self.len()).div_euclid(2) + self.cursor_offset;
        Cursor::block(x, self.region.y)
    }

    fn captures_input(&self) -> bool {
        self.is_editing()
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
