//! Canvas: a clipped drawing handle onto the compositor.
//!
//! A canvas covers one rectangular sub-region of the grid. Drawing takes
//! absolute coordinates; anything outside the canvas region is dropped.
//! Containers hand their children a canvas narrowed to their own region.

use super::compositor::Compositor;
use super::strip::{CellStyle, Strip};
use crate::geometry::Region;

/// A drawing surface limited to `region`.
pub struct Canvas<'a> {
    compositor: &'a mut Compositor,
    region: Region,
}

impl<'a> Canvas<'a> {
    /// A canvas over the whole grid.
    pub fn new(compositor: &'a mut Compositor) -> Self {
        let region = compositor.area();
        Self { compositor, region }
    }

    /// The region this canvas may draw into.
    pub fn region(&self) -> Region {
        self.region
    }

    /// A narrower canvas: the intersection of this region and `region`.
    pub fn sub(&mut self, region: Region) -> Canvas<'_> {
        Canvas {
            region: self.region.intersection(region),
            compositor: self.compositor,
        }
    }

    /// Draw `text` starting at absolute column `x`, row `y`.
    pub fn draw_str(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        self.draw_strip(&Strip::text(x, y, text, style));
    }

    /// Place a prepared strip.
    pub fn draw_strip(&mut self, strip: &Strip) {
        self.compositor
            .place_strips(std::slice::from_ref(strip), self.region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_at_absolute_position() {
        let mut grid = Compositor::new(8, 2);
        Canvas::new(&mut grid).draw_str(3, 1, "ab", CellStyle::REVERSE);
        assert_eq!(grid.row_text(1).as_deref(), Some("   ab   "));
        assert!(grid.get_cell(3, 1).unwrap().style.reverse);
    }

    #[test]
    fn sub_canvas_clips() {
        let mut grid = Compositor::new(8, 2);
        let mut canvas = Canvas::new(&mut grid);
        let mut inner = canvas.sub(Region::new(2, 0, 3, 1));
        assert_eq!(inner.region(), Region::new(2, 0, 3, 1));
        inner.draw_str(0, 0, "abcdefgh", CellStyle::NORMAL);
        inner.draw_str(0, 1, "zzz", CellStyle::NORMAL);
        assert_eq!(grid.row_text(0).as_deref(), Some("  cde   "));
        assert_eq!(grid.row_text(1).as_deref(), Some("        "));
    }

    #[test]
    fn nested_sub_canvas_intersects() {
        let mut grid = Compositor::new(10, 1);
        let mut canvas = Canvas::new(&mut grid);
        let mut outer = canvas.sub(Region::new(0, 0, 5, 1));
        let inner = outer.sub(Region::new(3, 0, 5, 1));
        assert_eq!(inner.region(), Region::new(3, 0, 2, 1));
    }
}
