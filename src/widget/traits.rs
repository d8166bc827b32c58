//! Widget trait: region, render, key handling, focus hooks.
//!
//! The `Widget` trait is the capability set shared by every node of the tree.
//! It is object-safe: the screen stores widgets as `Box<dyn Widget>` and
//! reaches concrete types through [`as_any`](Widget::as_any).

use std::any::Any;

use crate::dom::WidgetId;
use crate::event::{EventContext, Key};
use crate::geometry::Region;
use crate::render::{Canvas, Cursor};

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
pub trait Widget {
    /// The type name of this widget (e.g. "ScrollBox", "View").
    fn widget_type(&self) -> &str;

    /// The absolute region this widget occupies. Fixed at construction.
    fn region(&self) -> Region;

    /// Draw this widget.
    ///
    /// `focused` is true when this widget or one of its ancestors holds focus.
    /// Containers draw nothing themselves; the screen renders their children.
    fn render(&self, canvas: &mut Canvas<'_>, focused: bool);

    /// Default key handling, run after the widget's handler table missed.
    ///
    /// Returns whether the key was consumed. Widgets request focus changes and
    /// report changes through `cx`.
    fn handle_key(&mut self, _key: Key, _cx: &mut EventContext) -> bool {
        false
    }

    /// Called when this widget gains focus, before its `on_focus` hook.
    fn on_focus(&mut self) {}

    /// Called when this widget loses focus, before its `on_blur` hook.
    fn on_blur(&mut self) {}

    /// Hardware cursor requested while this widget holds focus.
    fn cursor(&self) -> Cursor {
        Cursor::Hidden
    }

    /// Whether keys should reach this widget before its ancestors while it
    /// holds focus.
    fn captures_input(&self) -> bool {
        false
    }

    /// The children that render and receive forwarded keys, in order.
    ///
    /// Defaults to every child.
    fn routes(&self, children: &[WidgetId]) -> Vec<WidgetId> {
        children.to_vec()
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
