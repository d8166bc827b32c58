//! Tree operations: insert, lookup, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, WidgetId};
use crate::widget::traits::Widget;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The widget tree, backed by a slotmap arena.
///
/// The arena owns every widget. Children are kept in insertion order and each
/// node stores its parent's handle as a plain, non-owning key. The tree is
/// static once built: nodes are never removed or re-parented, so a widget
/// appears in its parent's child list exactly once.
pub struct Dom {
    pub(crate) nodes: SlotMap<WidgetId, NodeData>,
    widgets: SecondaryMap<WidgetId, Box<dyn Widget>>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            widgets: SecondaryMap::new(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless widget.
    ///
    /// If no root has been set yet, this widget becomes the root.
    pub fn insert(&mut self, widget: Box<dyn Widget>, data: NodeData) -> WidgetId {
        let id = self.nodes.insert(data);
        self.widgets.insert(id, widget);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a widget as the last child of `parent`.
    ///
    /// Returns `None` (and inserts nothing) if `parent` is not in the tree.
    pub fn insert_child(
        &mut self,
        parent: WidgetId,
        widget: Box<dyn Widget>,
        data: NodeData,
    ) -> Option<WidgetId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let id = self.nodes.insert(data);
        self.widgets.insert(id, widget);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children.get_mut(parent)?.push(id);
        Some(id)
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's framework data.
    pub fn get(&self, id: WidgetId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's framework data.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// Immutable access to a node's widget.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    /// Mutable access to a node's widget.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.widgets.get_mut(id).map(|w| w.as_mut())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
