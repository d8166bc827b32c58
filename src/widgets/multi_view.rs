//! MultiView widget: a container showing one child at a time.

use std::any::Any;

use crate::dom::WidgetId;
use crate::geometry::Region;
use crate::render::Canvas;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// MultiView
// ---------------------------------------------------------------------------

/// A container that renders, and forwards keys to, only its shown child.
///
/// Switching the shown child is how pages are swapped. Until a child is shown
/// the container is blank.
pub struct MultiView {
    region: Region,
    shown: Option<WidgetId>,
}

impl MultiView {
    /// A multi-view covering all of `area`.
    pub fn new(area: Region) -> Self {
        Self {
            region: area,
            shown: None,
        }
    }

    /// The shown child.
    pub fn shown(&self) -> Option<WidgetId> {
        self.shown
    }

    /// Show `child`, hiding the previously shown one.
    ///
    /// Prefer [`Screen::show_page`](crate::screen::Screen::show_page), which
    /// checks that `child` belongs to this container.
    pub fn set_shown(&mut self, child: Option<WidgetId>) {
        self.shown = child;
    }
}

impl Widget for MultiView {
    fn widget_type(&self) -> &str {
        "MultiView"
    }

    fn region(&self) -> Region {
        self.region
    }

    fn render(&self, _canvas: &mut Canvas<'_>, _focused: bool) {}

    fn routes(&self, children: &[WidgetId]) -> Vec<WidgetId> {
        children
            .iter()
            .copied()
            .filter(|&child| Some(child) == self.shown)
            .collect()
    }

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
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<WidgetId> {
        let mut arena: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn routes_nothing_until_shown() {
        let children = ids(2);
        let view = MultiView::new(Region::new(0, 0, 10, 4));
        assert!(view.routes(&children).is_empty());
        assert_eq!(view.shown(), None);
    }

    #[test]
    fn routes_only_shown_child() {
        let children = ids(3);
        let mut view = MultiView::new(Region::new(0, 0, 10, 4));
        view.set_shown(Some(children[1]));
        assert_eq!(view.routes(&children), vec![children[1]]);
    }

    #[test]
    fn shown_outside_children_routes_nothing() {
        let children = ids(3);
        let mut view = MultiView::new(Region::new(0, 0, 10, 4));
        view.set_shown(Some(children[2]));
        assert!(view.routes(&children[..2]).is_empty());
    }
}
