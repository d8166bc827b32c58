//! Per-widget key handler tables.
//!
//! A [`KeyMap`] maps a [`Key`] to a [`Callback`]. Screens consult a widget's
//! table before the widget's own key handling; a hit consumes the key.

use std::collections::HashMap;
use std::rc::Rc;

use super::input::Key;
use crate::dom::node::WidgetId;
use crate::screen::Screen;

/// An action or hook, invoked with the screen and the owning widget's id.
pub type Callback = Rc<dyn Fn(&mut Screen, WidgetId)>;

// ---------------------------------------------------------------------------
// KeyMap
// ---------------------------------------------------------------------------

/// Key handler table: `Key -> Callback`.
#[derive(Default, Clone)]
pub struct KeyMap {
    bindings: HashMap<Key, Callback>,
}

impl KeyMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Register an action for `key`, replacing any previous one.
    pub fn bind(&mut self, key: Key, action: impl Fn(&mut Screen, WidgetId) + 'static) {
        self.bindings.insert(key, Rc::new(action));
    }

    /// Remove the action for `key`. Returns whether one was bound.
    pub fn unbind(&mut self, key: Key) -> bool {
        self.bindings.remove(&key).is_some()
    }

    /// Look up the action for `key`.
    ///
    /// Returns a shared handle so the caller can run it while mutating the
    /// screen that owns this table.
    pub fn resolve(&self, key: Key) -> Option<Callback> {
        self.bindings.get(&key).cloned()
    }

    /// Whether `key` has an action.
    pub fn contains(&self, key: Key) -> bool {
        self.bindings.contains_key(&key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Debug for KeyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.bindings.keys()).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
