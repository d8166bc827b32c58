//! Focus manager: the single focused widget and the transitions between them.
//!
//! [`FocusManager`] only does the bookkeeping. It reports each change as a
//! [`Transition`] and the [`Screen`](crate::screen::Screen) runs the blur and
//! focus hooks. A request made while a transition is still being applied
//! (from inside a hook) is queued and handed out by [`FocusManager::finish`].

use std::collections::VecDeque;

use crate::dom::WidgetId;

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// One focus change: `blurred` lost focus, then `focused` gained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub blurred: Option<WidgetId>,
    pub focused: Option<WidgetId>,
}

// ---------------------------------------------------------------------------
// FocusManager
// ---------------------------------------------------------------------------

/// Holds at most one focused widget.
#[derive(Debug, Default)]
pub struct FocusManager {
    current: Option<WidgetId>,
    in_flight: bool,
    pending: VecDeque<Option<WidgetId>>,
}

impl FocusManager {
    /// No widget focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused widget, if any.
    pub fn current(&self) -> Option<WidgetId> {
        self.current
    }

    /// Whether `id` is the focused widget.
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.current == Some(id)
    }

    /// Whether a transition is being applied.
    pub fn in_transition(&self) -> bool {
        self.in_flight
    }

    /// Move focus to `target`, or clear it when `None`.
    ///
    /// Returns the transition to apply. While another transition is in
    /// flight the request is queued and `None` is returned. Refocusing the
    /// focused widget still blurs it first.
    pub fn request(&mut self, target: Option<WidgetId>) -> Option<Transition> {
        if self.in_flight {
            self.pending.push_back(target);
            return None;
        }
        let blurred = self.current.take();
        if blurred.is_none() && target.is_none() {
            return None;
        }
        self.current = target;
        self.in_flight = true;
        Some(Transition {
            blurred,
            focused: target,
        })
    }

    /// Mark the in-flight transition as applied and start the next queued one.
    pub fn finish(&mut self) -> Option<Transition> {
        self.in_flight = false;
        while let Some(target) = self.pending.pop_front() {
            if let Some(next) = self.request(target) {
                return Some(next);
            }
        }
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================
