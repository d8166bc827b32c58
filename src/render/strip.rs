//! Strip: a horizontal line of styled terminal cells.
//!
//! A `Strip` is the unit the compositor places into its grid. Widgets draw
//! through a [`Canvas`](super::canvas::Canvas), which builds strips and clips
//! them to the drawing region.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Display attribute of a cell: normal or reverse video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub reverse: bool,
}

impl CellStyle {
    /// Plain text.
    pub const NORMAL: CellStyle = CellStyle { reverse: false };
    /// Reverse video (highlight).
    pub const REVERSE: CellStyle = CellStyle { reverse: true };

    /// `REVERSE` when `on`, otherwise `NORMAL`.
    pub const fn highlight(on: bool) -> Self {
        CellStyle { reverse: on }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self::new(' ', CellStyle::NORMAL)
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal run of styled cells at row `y`, starting at column `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// The absolute row this strip occupies.
    pub y: i32,
    /// Absolute column of the first cell.
    pub x_offset: i32,
    /// The cells in left-to-right order.
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// A strip holding `text` in a single style.
    pub fn text(x: i32, y: i32, text: &str, style: CellStyle) -> Self {
        let mut strip = Self::new(y, x);
        strip.push_str(text, style);
        strip
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        self.cells
            .extend(text.chars().map(|ch| StyledCell::new(ch, style)));
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// The characters of this strip as a string.
    pub fn as_text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
