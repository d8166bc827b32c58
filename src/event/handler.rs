//! Key-handling context: what a widget may ask of its screen.
//!
//! Widgets handle keys with `&mut self` only, so they cannot reach the focus
//! manager or other widgets directly. Instead they queue [`Command`]s on the
//! [`EventContext`]; the screen applies them once the widget's borrow ends.

use std::collections::VecDeque;

use crate::dom::node::WidgetId;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A request from a widget to its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus to the widget, or clear it when `None`.
    Focus(Option<WidgetId>),
    /// Fire the widget's `on_change` hook.
    Changed,
}

// ---------------------------------------------------------------------------
// EventContext
// ---------------------------------------------------------------------------

/// Per-dispatch context handed to [`Widget::handle_key`](crate::widget::Widget::handle_key).
#[derive(Debug)]
pub struct EventContext {
    id: WidgetId,
    focused: bool,
    commands: VecDeque<Command>,
}

impl EventContext {
    /// Context for widget `id`; `focused` is true when it or an ancestor
    /// holds focus.
    pub fn new(id: WidgetId, focused: bool) -> Self {
        Self {
            id,
            focused,
            commands: VecDeque::new(),
        }
    }

    /// The widget receiving the key.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether the widget sits in the focused chain.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Queue a command for the screen.
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Request a focus transition.
    pub fn focus(&mut self, target: Option<WidgetId>) {
        self.push(Command::Focus(target));
    }

    /// Report a change to the widget's `on_change` hook.
    pub fn changed(&mut self) {
        self.push(Command::Changed);
    }

    /// Drain queued commands in the order they were pushed.
    pub fn drain(&mut self) -> Vec<Command> {
        self.commands.drain(..).collect()
    }

    /// Number of queued commands.
    pub fn pending_count(&self) -> usize {
        self.commands.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
