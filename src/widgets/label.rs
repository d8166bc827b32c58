//! Label widget: displays text that only the program changes.

use std::any::Any;

use crate::geometry::Region;
use crate::render::{Canvas, CellStyle};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Non-interactive text.
///
/// Lines are split on `'\n'`, one per row from the top of the region; text
/// beyond the region is clipped.
pub struct Label {
    region: Region,
    text: String,
    style: CellStyle,
}

impl Label {
    /// Create a new label occupying `region`.
    pub fn new(region: Region, text: impl Into<String>) -> Self {
        Self {
            region,
            text: text.into(),
            style: CellStyle::NORMAL,
        }
    }

    /// Draw in reverse video (builder).
    pub fn reversed(mut self) -> Self {
        self.style = CellStyle::REVERSE;
        self
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn region(&self) -> Region {
        self.region
    }

    fn render(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let mut canvas = canvas.sub(self.region);
        for (row, line) in self.text.split('\n').enumerate() {
            canvas.draw_str(self.region.x, self.region.y + row as i32, line, self.style);
        }
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
