//! View widget: a plain container.

use std::any::Any;

use crate::geometry::Region;
use crate::render::Canvas;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// A container that renders every visible child and forwards unhandled keys
/// to each child in order.
///
/// A view draws nothing of its own; children are rendered by the screen,
/// clipped to the view's region.
pub struct View {
    region: Region,
}

impl View {
    /// A view covering all of `area`.
    pub fn new(area: Region) -> Self {
        Self { region: area }
    }

    /// A view at (`x`, `y`) relative to `area`. A zero `width` or `height`
    /// inherits `area`'s extent.
    pub fn within(area: Region, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            region: area.child(x, y, width, height),
        }
    }
}

impl Widget for View {
    fn widget_type(&self) -> &str {
        "View"
    }

    fn region(&self) -> Region {
        self.region
    }

    fn render(&self, _canvas: &mut Canvas<'_>, _focused: bool) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_covers_area() {
        let area = Region::new(0, 0, 80, 24);
        assert_eq!(View::new(area).region(), area);
    }

    #[test]
    fn within_inherits_zero_extent() {
        let area = Region::new(1, 1, 80, 24);
        assert_eq!(View::within(area, 0, 3, 0, 0).region(), Region::new(1, 4, 80, 24));
        assert_eq!(View::within(area, 5, 0, 10, 2).region(), Region::new(6, 1, 10, 2));
    }
}
