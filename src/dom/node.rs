//! Node types: WidgetId, NodeData, Hooks.

use slotmap::new_key_type;

use crate::event::binding::{Callback, KeyMap};

new_key_type! {
    /// Handle to a widget in the arena. Copy, lightweight, never owning.
    pub struct WidgetId;
}

/// Optional per-instance callbacks, invoked with the widget's own id.
#[derive(Default, Clone)]
pub struct Hooks {
    /// Runs after the widget gains focus.
    pub on_focus: Option<Callback>,
    /// Runs after the widget loses focus.
    pub on_blur: Option<Callback>,
    /// Runs when the widget reports a change (selection moved, value edited).
    pub on_change: Option<Callback>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Framework-side state attached to every widget.
#[derive(Debug, Default, Clone)]
pub struct NodeData {
    /// Whether this widget renders.
    pub visible: bool,
    /// Key handler table, consulted before the widget's own key handling.
    pub keys: KeyMap,
    /// Focus/blur/change callbacks.
    pub hooks: Hooks,
}

impl NodeData {
    /// Visible, with an empty key table and no hooks.
    pub fn new() -> Self {
        Self {
            visible: true,
            keys: KeyMap::new(),
            hooks: Hooks::default(),
        }
    }

    /// Set visibility (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
