//! Frame buffer and frame diffing.
//!
//! The `Compositor` holds a 2D grid of `StyledCell`s covering the whole
//! terminal. A frame is built by clearing the grid and placing the strips of
//! every visible widget; `diff` then compares two frames and produces only the
//! `CellUpdate`s needed to transition between them.

use super::strip::{Strip, StyledCell};
use crate::geometry::Region;

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell to write to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// A fixed-size screen buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compositor {
    /// The 2D screen buffer. `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<StyledCell>>,
    /// Grid width.
    pub width: u16,
    /// Grid height.
    pub height: u16,
}

impl Compositor {
    /// Create a new compositor with a blank screen of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Self::blank_screen(width, height),
            width,
            height,
        }
    }

    /// The whole grid as a region.
    pub fn area(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        for row in &mut self.screen {
            row.fill(StyledCell::blank());
        }
    }

    /// Place strips into the screen buffer, clipped to `clip`.
    ///
    /// Cells outside both `clip` and the screen bounds are dropped.
    pub fn place_strips(&mut self, strips: &[Strip], clip: Region) {
        let clip = clip.intersection(self.area());
        if clip.is_empty() {
            return;
        }

        for strip in strips {
            let y = strip.y;
            if y < clip.y || y >= clip.bottom() {
                continue;
            }
            let row = &mut self.screen[y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x < clip.x || x >= clip.right() {
                    continue;
                }
                row[x as usize] = *cell;
            }
        }
    }

    /// Compare this frame against `previous` and return only the changed cells.
    ///
    /// Frames of different dimensions are not comparable; every cell of this
    /// frame is returned instead.
    pub fn diff(&self, previous: &Compositor) -> Vec<CellUpdate> {
        if self.width != previous.width || self.height != previous.height {
            return self.all_cells();
        }
        let mut updates = Vec::new();
        for (y, (row, prev_row)) in self.screen.iter().zip(&previous.screen).enumerate() {
            for (x, (cell, prev)) in row.iter().zip(prev_row).enumerate() {
                if cell != prev {
                    updates.push(CellUpdate {
                        x: x as u16,
                        y: y as u16,
                        cell: *cell,
                    });
                }
            }
        }
        updates
    }

    /// Write cell updates into the grid. Out-of-bounds cells are dropped.
    pub fn apply(&mut self, updates: &[CellUpdate]) {
        for update in updates {
            if let Some(cell) = self
                .screen
                .get_mut(update.y as usize)
                .and_then(|row| row.get_mut(update.x as usize))
            {
                *cell = update.cell;
            }
        }
    }

    /// Every cell of the frame, row by row.
    pub fn all_cells(&self) -> Vec<CellUpdate> {
        self.screen
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().map(move |(x, cell)| CellUpdate {
                    x: x as u16,
                    y: y as u16,
                    cell: *cell,
                })
            })
            .collect()
    }

    /// Get a reference to the screen buffer cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
    }

    /// The characters of row `y`, or `None` when out of bounds.
    pub fn row_text(&self, y: u16) -> Option<String> {
        self.screen
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
    }

    /// Create a blank screen buffer.
    fn blank_screen(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
        vec![vec![StyledCell::blank(); width as usize]; height as usize]
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    fn strip(x: i32, y: i32, text: &str) -> Strip {
        Strip::text(x, y, text, CellStyle::NORMAL)
    }

    #[test]
    fn new_is_blank() {
        let c = Compositor::new(4, 2);
        assert_eq!(c.area(), Region::new(0, 0, 4, 2));
        assert_eq!(c.row_text(0).as_deref(), Some("    "));
        assert_eq!(c.get_cell(3, 1), Some(&StyledCell::blank()));
        assert_eq!(c.get_cell(4, 0), None);
    }

    #[test]
    fn place_strips_writes_cells() {
        let mut c = Compositor::new(10, 2);
        c.place_strips(&[strip(2, 1, "hey")], c.area());
        assert_eq!(c.row_text(1).as_deref(), Some("  hey     "));
    }

    #[test]
    fn place_strips_clips_to_region() {
        let mut c = Compositor::new(10, 3);
        c.place_strips(&[strip(0, 1, "abcdefgh"), strip(0, 0, "zz")], Region::new(2, 1, 3, 1));
        assert_eq!(c.row_text(0).as_deref(), Some("          "));
        assert_eq!(c.row_text(1).as_deref(), Some("  cde     "));
    }

    #[test]
    fn place_strips_clips_to_screen() {
        let mut c = Compositor::new(3, 1);
        c.place_strips(&[strip(-1, 0, "abcde")], Region::new(-5, -5, 50, 50));
        assert_eq!(c.row_text(0).as_deref(), Some("bcd"));
    }

    #[test]
    fn clear_blanks_everything() {
        let mut c = Compositor::new(3, 1);
        c.place_strips(&[strip(0, 0, "abc")], c.area());
        c.clear();
        assert_eq!(c.row_text(0).as_deref(), Some("   "));
    }

    #[test]
    fn diff_reports_changed_cells_only() {
        let prev = Compositor::new(5, 2);
        let mut next = prev.clone();
        next.place_strips(&[strip(1, 1, "ok")], next.area());
        let updates = next.diff(&prev);
        assert_eq!(updates.len(), 2);
        assert_eq!((updates[0].x, updates[0].y, updates[0].cell.ch), (1, 1, 'o'));
        assert_eq!((updates[1].x, updates[1].y, updates[1].cell.ch), (2, 1, 'k'));
    }

    #[test]
    fn diff_identical_frames_is_empty() {
        let c = Compositor::new(5, 2);
        assert!(c.diff(&c.clone()).is_empty());
    }

    #[test]
    fn diff_with_style_change() {
        let mut prev = Compositor::new(2, 1);
        prev.place_strips(&[strip(0, 0, "a")], prev.area());
        let mut next = Compositor::new(2, 1);
        next.place_strips(&[Strip::text(0, 0, "a", CellStyle::REVERSE)], next.area());
        assert_eq!(next.diff(&prev).len(), 1);
    }

    #[test]
    fn apply_replays_diff() {
        let prev = Compositor::new(4, 2);
        let mut next = prev.clone();
        next.place_strips(&[strip(1, 0, "ab"), strip(0, 1, "c")], next.area());
        let mut replay = prev.clone();
        replay.apply(&next.diff(&prev));
        replay.apply(&[CellUpdate { x: 9, y: 9, cell: StyledCell::blank() }]);
        assert_eq!(replay, next);
    }

    #[test]
    fn diff_against_other_size_returns_all() {
        let prev = Compositor::new(2, 2);
        let next = Compositor::new(3, 2);
        assert_eq!(next.diff(&prev).len(), 6);
        assert_eq!(next.all_cells().len(), 6);
    }
}
