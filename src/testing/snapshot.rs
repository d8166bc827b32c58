//! Snapshot rendering helpers.
//!
//! Functions for turning frames into plain-text strings suitable for
//! `insta` snapshots and assertions.

use crate::render::Compositor;
use crate::screen::Screen;

/// Marks a reverse-video cell in [`highlights_to_string`].
pub const HIGHLIGHT: char = '#';

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a screen's current frame to text.
pub fn render_to_string(screen: &Screen) -> String {
    compositor_to_string(&screen.render_frame())
}

/// Convert a frame to text.
///
/// Each row is right-trimmed of spaces and rows are joined with `'\n'`.
pub fn compositor_to_string(compositor: &Compositor) -> String {
    rows(compositor, |cell| cell.ch)
}

/// Convert a frame to a mask: [`HIGHLIGHT`] for reverse-video cells, space
/// otherwise. Rows are right-trimmed and joined with `'\n'`.
pub fn highlights_to_string(compositor: &Compositor) -> String {
    rows(compositor, |cell| if cell.style.reverse { HIGHLIGHT } else { ' ' })
}

fn rows(compositor: &Compositor, glyph: impl Fn(&crate::render::StyledCell) -> char) -> String {
    let lines: Vec<String> = (0..compositor.height)
        .map(|y| {
            let row: String = (0..compositor.width)
                .map(|x| compositor.get_cell(x, y).map_or(' ', &glyph))
                .collect();
            row.trim_end().to_owned()
        })
        .collect();
    lines.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
