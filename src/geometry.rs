//! Core geometry: Region, column-fraction layout, text fitting.
//!
//! Every widget's [`Region`] is derived once at construction from its parent's
//! region and a [`ColumnSpan`]. Edges follow [`column_edge`]; values are fitted
//! into their allotted width with [`pad`].

/// Ellipsis appended to truncated text by [`pad`].
pub const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An absolute rectangle of the character grid.
///
/// Regions never change after a widget is constructed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Whether the region covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    #[inline]
    pub const fn intersection(self, other: Region) -> Region {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        let w = x2 - x1;
        let h = y2 - y1;

        if w <= 0 || h <= 0 {
            Region::EMPTY
        } else {
            Region { x: x1, y: y1, width: w, height: h }
        }
    }

    /// A child region positioned relative to this one.
    ///
    /// Zero `width`/`height` inherit this region's extent, mirroring how a
    /// sub-window defaults to its parent's size.
    pub fn child(self, x: i32, y: i32, width: i32, height: i32) -> Region {
        Region {
            x: self.x + x,
            y: self.y + y,
            width: if width == 0 { self.width } else { width },
            height: if height == 0 { self.height } else { height },
        }
    }

    /// The band covered by `span` on row `row` (relative), `height` rows tall.
    pub fn band(self, row: i32, span: ColumnSpan, height: i32) -> Region {
        let (start, end) = span.edges(self.width);
        Region {
            x: self.x + start,
            y: self.y + row,
            width: end - start,
            height,
        }
    }
}

// ---------------------------------------------------------------------------
// Column-fraction layout
// ---------------------------------------------------------------------------

/// The x coordinate of column boundary `column` out of `total_columns`.
///
/// Computed as `floor((column * (grid_width + 1) + 0.5) / total_columns)` in
/// exact integer arithmetic. A non-positive `total_columns` yields `0`.
pub fn column_edge(column: i32, total_columns: i32, grid_width: i32) -> i32 {
    if total_columns <= 0 {
        return 0;
    }
    let numerator = 2 * i64::from(column) * (i64::from(grid_width) + 1) + 1;
    let denominator = 2 * i64::from(total_columns);
    numerator.div_euclid(denominator) as i32
}

/// A placement of `span` columns starting at `column`, out of `total`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnSpan {
    pub column: i32,
    pub span: i32,
    pub total: i32,
}

impl ColumnSpan {
    /// Create a new column span.
    pub const fn new(column: i32, span: i32, total: i32) -> Self {
        Self { column, span, total }
    }

    /// The full width as a single column.
    pub const fn full() -> Self {
        Self::new(0, 1, 1)
    }

    /// Start and end edges (relative) for a parent of `width` cells.
    pub fn edges(self, width: i32) -> (i32, i32) {
        (
            column_edge(self.column, self.total, width),
            column_edge(self.column + self.span, self.total, width),
        )
    }
}

// ---------------------------------------------------------------------------
// Text fitting
// ---------------------------------------------------------------------------

/// Fit `text` into exactly `width` characters.
///
/// Longer text keeps its first `width - 3` characters followed by
/// [`ELLIPSIS`]. When `width` is narrower than the ellipsis itself the result
/// is the ellipsis cut to `width` dots. Shorter text is centered with spaces,
/// the odd space going to the right.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let marker = ELLIPSIS.chars().count();
        if width < marker {
            return ELLIPSIS.chars().take(width).collect();
        }
        let mut out: String = text.chars().take(width - marker).collect();
        out.push_str(ELLIPSIS);
        out
    } else if len < width {
        let gap = width - len;
        let mut out = String::with_capacity(text.len() + gap);
        out.extend(std::iter::repeat(' ').take(gap / 2));
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take((gap + 1) / 2));
        out
    } else {
        text.to_owned()
    }
}

/// Remove accelerator markers: `"[M]ETHOD"` becomes `"METHOD"`.
pub fn strip_markers(label: &str) -> String {
    label.chars().filter(|&c| c != '[' && c != ']').collect()
}

/// The lowercase shortcut letter marked in `label`, if any.
///
/// `"[U]RL"` yields `Some('u')`; a label without brackets yields `None`.
pub fn accelerator(label: &str) -> Option<char> {
    let open = label.find('[')?;
    let rest = &label[open + 1..];
    let ch = rest.chars().next()?;
    if ch == ']' || !rest[ch.len_utf8()..].starts_with(']') {
        return None;
    }
    ch.to_lowercase().next()
}

// ===========================================================================
// Tests
// ===========================================================================
