//! Screen: the widget tree, focus, key dispatch and frame rendering.
//!
//! [`Screen`] owns the [`Dom`] and the [`FocusManager`] for one fixed-size
//! grid. Widgets are mounted once, top-down, each built from its parent's
//! region; the tree does not change shape afterwards.
//!
//! Key dispatch has two modes:
//!
//! - When the focused widget [captures input](Widget::captures_input), the key
//!   goes to that widget first (its handler table, then its own handling) and
//!   escalates through the handler tables of its ancestors.
//! - Otherwise the key descends from the root. Each visible widget consults
//!   its handler table, then its own handling, then forwards the key to its
//!   routed children in order until one consumes it.

use tracing::{debug, trace, warn};

use crate::dom::{Dom, NodeData, WidgetId};
use crate::event::{Callback, Command, EventContext, Key};
use crate::focus::FocusManager;
use crate::geometry::Region;
use crate::render::{Canvas, Compositor, Cursor};
use crate::widget::Widget;
use crate::widgets::{FieldState, LabeledField, MultiView, ScrollBox};

#[derive(Debug, Clone, Copy)]
enum Hook {
    Focus,
    Blur,
    Change,
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A single screen of widgets over a `width` x `height` grid.
pub struct Screen {
    dom: Dom,
    focus: FocusManager,
    width: u16,
    height: u16,
}

impl Screen {
    /// Create an empty screen for a grid of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            dom: Dom::new(),
            focus: FocusManager::new(),
            width,
            height,
        }
    }

    /// The whole grid.
    pub fn area(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Grid dimensions `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The widget tree.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    // -----------------------------------------------------------------------
    // Mounting
    // -----------------------------------------------------------------------

    /// Mount the root widget, built from the whole grid.
    ///
    /// Only the first root mounted is rendered and receives keys.
    pub fn mount_root<W, F>(&mut self, build: F) -> WidgetId
    where
        W: Widget + 'static,
        F: FnOnce(Region) -> W,
    {
        let widget = build(self.area());
        self.dom.insert(Box::new(widget), NodeData::new())
    }

    /// Mount a widget as the last child of `parent`, built from the parent's
    /// region.
    ///
    /// If `parent` is unknown the widget is still stored, detached from the
    /// tree, so it never renders nor receives keys.
    pub fn mount<W, F>(&mut self, parent: WidgetId, build: F) -> WidgetId
    where
        W: Widget + 'static,
        F: FnOnce(Region) -> W,
    {
        let Some(area) = self.region(parent) else {
            warn!(?parent, "mount under unknown parent, widget left detached");
            let widget = build(Region::EMPTY);
            return self.dom.insert(Box::new(widget), NodeData::new());
        };
        let widget = Box::new(build(area));
        self.dom
            .insert_child(parent, widget, NodeData::new())
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The widget at `id`.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.dom.widget(id)
    }

    /// The widget at `id` as its concrete type.
    pub fn get<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.dom.widget(id)?.as_any().downcast_ref()
    }

    /// Mutable access to the widget at `id` as its concrete type.
    pub fn get_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.dom.widget_mut(id)?.as_any_mut().downcast_mut()
    }

    /// The region of the widget at `id`.
    pub fn region(&self, id: WidgetId) -> Option<Region> {
        self.dom.widget(id).map(|w| w.region())
    }

    // -----------------------------------------------------------------------
    // Visibility
    // -----------------------------------------------------------------------

    /// Make a widget render and receive keys again.
    pub fn show(&mut self, id: WidgetId) {
        if let Some(data) = self.dom.get_mut(id) {
            data.visible = true;
        }
    }

    /// Stop a widget (and its subtree) from rendering or receiving keys.
    pub fn hide(&mut self, id: WidgetId) {
        if let Some(data) = self.dom.get_mut(id) {
            data.visible = false;
        }
    }

    /// The widget's own visibility flag.
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.dom.get(id).is_some_and(|d| d.visible)
    }

    /// Whether keys and the frame can reach the widget: it and its ancestors
    /// are visible, and every ancestor routes to the branch holding it.
    pub fn is_reachable(&self, id: WidgetId) -> bool {
        if !self.is_visible(id) {
            return false;
        }
        let mut current = id;
        for ancestor in self.dom.ancestors(id) {
            let routed = self
                .dom
                .widget(ancestor)
                .is_some_and(|w| w.routes(self.dom.children(ancestor)).contains(&current));
            if !routed || !self.is_visible(ancestor) {
                return false;
            }
            current = ancestor;
        }
        true
    }

    // -----------------------------------------------------------------------
    // Key tables and hooks
    // -----------------------------------------------------------------------

    /// Bind `action` to `key` in the widget's handler table.
    pub fn bind(&mut self, id: WidgetId, key: Key, action: impl Fn(&mut Screen, WidgetId) + 'static) {
        if let Some(data) = self.dom.get_mut(id) {
            data.keys.bind(key, action);
        }
    }

    /// Remove the binding for `key`. Returns whether one existed.
    pub fn unbind(&mut self, id: WidgetId, key: Key) -> bool {
        self.dom.get_mut(id).is_some_and(|d| d.keys.unbind(key))
    }

    /// Run `hook` after the widget gains focus.
    pub fn on_focus(&mut self, id: WidgetId, hook: impl Fn(&mut Screen, WidgetId) + 'static) {
        if let Some(data) = self.dom.get_mut(id) {
            data.hooks.on_focus = Some(std::rc::Rc::new(hook));
        }
    }

    /// Run `hook` after the widget loses focus.
    pub fn on_blur(&mut self, id: WidgetId, hook: impl Fn(&mut Screen, WidgetId) + 'static) {
        if let Some(data) = self.dom.get_mut(id) {
            data.hooks.on_blur = Some(std::rc::Rc::new(hook));
        }
    }

    /// Run `hook` when the widget reports a change.
    pub fn on_change(&mut self, id: WidgetId, hook: impl Fn(&mut Screen, WidgetId) + 'static) {
        if let Some(data) = self.dom.get_mut(id) {
            data.hooks.on_change = Some(std::rc::Rc::new(hook));
        }
    }

    fn fire(&mut self, id: WidgetId, hook: Hook) {
        let callback: Option<Callback> = self.dom.get(id).and_then(|d| match hook {
            Hook::Focus => d.hooks.on_focus.clone(),
            Hook::Blur => d.hooks.on_blur.clone(),
            Hook::Change => d.hooks.on_change.clone(),
        });
        if let Some(callback) = callback {
            trace!(?id, ?hook, "running hook");
            callback(self, id);
        }
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.current()
    }

    /// Whether `id` is the focused widget.
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focus.is_focused(id)
    }

    /// Whether `id` or one of its ancestors is focused.
    pub fn in_focused_chain(&self, id: WidgetId) -> bool {
        match self.focus.current() {
            Some(focused) => focused == id || self.dom.ancestors(id).contains(&focused),
            None => false,
        }
    }

    /// Focus `id`, blurring the previously focused widget first.
    ///
    /// Unknown ids are ignored.
    pub fn focus_on(&mut self, id: WidgetId) {
        if !self.dom.contains(id) {
            warn!(?id, "focus request for unknown widget ignored");
            return;
        }
        self.transition(Some(id));
    }

    /// Blur the focused widget, if any, leaving nothing focused.
    pub fn clear_focus(&mut self) {
        self.transition(None);
    }

    fn transition(&mut self, target: Option<WidgetId>) {
        let mut next = self.focus.request(target);
        if next.is_none() && self.focus.in_transition() {
            trace!(?target, "focus request queued");
        }
        while let Some(t) = next {
            debug!(blurred = ?t.blurred, focused = ?t.focused, "focus transition");
            if let Some(blurred) = t.blurred {
                if let Some(widget) = self.dom.widget_mut(blurred) {
                    widget.on_blur();
                }
                self.fire(blurred, Hook::Blur);
            }
            if let Some(focused) = t.focused {
                if let Some(widget) = self.dom.widget_mut(focused) {
                    widget.on_focus();
                }
                self.fire(focused, Hook::Focus);
            }
            next = self.focus.finish();
        }
    }

    // -----------------------------------------------------------------------
    // Widget operations
    // -----------------------------------------------------------------------

    /// Put a [`LabeledField`] into the editing state and focus it.
    ///
    /// The previously focused widget gets focus back when editing ends with
    /// Enter. Returns `false` if `id` is not a field.
    pub fn start_editing(&mut self, id: WidgetId) -> bool {
        let previous = self.focus.current();
        let Some(field) = self.get::<LabeledField>(id) else {
            return false;
        };
        let return_to = match field.state() {
            FieldState::Editing { return_to } if previous == Some(id) => return_to,
            _ => previous,
        };
        self.focus_on(id);
        if let Some(field) = self.get_mut::<LabeledField>(id) {
            field.begin_editing(return_to);
            debug!(?id, label = field.label(), "editing started");
        }
        true
    }

    /// Select index `target` of a [`ScrollBox`], clamped into its items, and
    /// fire its change hook.
    ///
    /// Returns `false` when `id` is not a list or the list is empty.
    pub fn scroll_to(&mut self, id: WidgetId, target: isize) -> bool {
        let moved = self
            .get_mut::<ScrollBox>(id)
            .is_some_and(|list| list.scroll_to(target));
        if moved {
            self.fire(id, Hook::Change);
        }
        moved
    }

    /// Select the first item equal to `value`. A miss changes nothing.
    pub fn scroll_to_value(&mut self, id: WidgetId, value: &str) -> bool {
        let moved = self
            .get_mut::<ScrollBox>(id)
            .is_some_and(|list| list.scroll_to_value(value));
        if moved {
            self.fire(id, Hook::Change);
        }
        moved
    }

    /// Show `page` in the [`MultiView`] `multi`.
    ///
    /// Returns `false` unless `multi` is a multi-view and `page` is one of
    /// its children.
    pub fn show_page(&mut self, multi: WidgetId, page: WidgetId) -> bool {
        if !self.dom.children(multi).contains(&page) {
            return false;
        }
        match self.get_mut::<MultiView>(multi) {
            Some(view) => {
                view.set_shown(Some(page));
                debug!(?multi, ?page, "page switched");
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Key dispatch
    // -----------------------------------------------------------------------

    /// Deliver one key. Returns whether any widget consumed it.
    pub fn dispatch_key(&mut self, key: Key) -> bool {
        if let Some(focused) = self.focus.current() {
            let captures = self.dom.widget(focused).is_some_and(|w| w.captures_input());
            if captures && self.is_reachable(focused) {
                trace!(?key, ?focused, "dispatch to focused widget");
                if self.run_table(focused, key) || self.run_widget(focused, key, true) {
                    return true;
                }
                let ancestors = self.dom.ancestors(focused);
                return ancestors.into_iter().any(|id| self.run_table(id, key));
            }
        }
        trace!(?key, "dispatch from root");
        match self.dom.root() {
            Some(root) => self.dispatch(root, key, false),
            None => false,
        }
    }

    fn dispatch(&mut self, id: WidgetId, key: Key, chain: bool) -> bool {
        if !self.is_visible(id) {
            return false;
        }
        let chain = chain || self.focus.is_focused(id);
        if self.run_table(id, key) || self.run_widget(id, key, chain) {
            return true;
        }
        let routes = match self.dom.widget(id) {
            Some(widget) => widget.routes(self.dom.children(id)),
            None => return false,
        };
        routes.into_iter().any(|child| self.dispatch(child, key, chain))
    }

    fn run_table(&mut self, id: WidgetId, key: Key) -> bool {
        let action = self.dom.get(id).and_then(|d| d.keys.resolve(key));
        match action {
            Some(action) => {
                trace!(?id, ?key, "key handler");
                action(self, id);
                true
            }
            None => false,
        }
    }

    fn run_widget(&mut self, id: WidgetId, key: Key, focused: bool) -> bool {
        let mut cx = EventContext::new(id, focused);
        let consumed = match self.dom.widget_mut(id) {
            Some(widget) => widget.handle_key(key, &mut cx),
            None => false,
        };
        for command in cx.drain() {
            self.apply(id, command);
        }
        consumed
    }

    fn apply(&mut self, id: WidgetId, command: Command) {
        match command {
            Command::Focus(Some(target)) => self.focus_on(target),
            Command::Focus(None) => self.clear_focus(),
            Command::Changed => self.fire(id, Hook::Change),
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Draw every displayed widget into a fresh frame.
    pub fn render_frame(&self) -> Compositor {
        let mut frame = Compositor::new(self.width, self.height);
        if let Some(root) = self.dom.root() {
            let mut canvas = Canvas::new(&mut frame);
            self.render_node(root, &mut canvas, false);
        }
        frame
    }

    fn render_node(&self, id: WidgetId, canvas: &mut Canvas<'_>, chain: bool) {
        if !self.is_visible(id) {
            return;
        }
        let Some(widget) = self.dom.widget(id) else {
            return;
        };
        let chain = chain || self.focus.is_focused(id);
        widget.render(canvas, chain);
        let mut inner = canvas.sub(widget.region());
        for child in widget.routes(self.dom.children(id)) {
            self.render_node(child, &mut inner, chain);
        }
    }

    /// The hardware cursor for the focused widget. Hidden when nothing is
    /// focused or the focused widget is not reachable.
    pub fn cursor(&self) -> Cursor {
        match self.focus.current() {
            Some(id) if self.is_reachable(id) => {
                self.dom.widget(id).map_or(Cursor::Hidden, |w| w.cursor())
            }
            _ => Cursor::Hidden,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
