//! Widget arena: slotmap-backed tree of owned widgets with parent handles.

pub mod node;
pub mod tree;

pub use node::{Hooks, NodeData, WidgetId};
pub use tree::Dom;
