//! The HTTP request builder screen.
//!
//! ```text
//! root View
//! ├── pages MultiView
//! │   ├── home View        METHOD, URL / HEADERS, QUERY, BODY
//! │   └── headers View     header page, Enter returns home
//! ├── menu ScrollBox       method picker, hidden until [M]ETHOD
//! └── status Label         "<method> <url>"
//! ```
//!
//! Field shortcuts come from the bracketed letter in each label. The method
//! menu keeps one explicit letter per item since several methods share an
//! initial.

use tracing::debug;

use crate::dom::WidgetId;
use crate::event::Key;
use crate::geometry::{accelerator, pad, ColumnSpan};
use crate::screen::Screen;
use crate::widgets::{Label, LabeledField, MultiView, ScrollBox, View};

/// Methods offered by the menu, in order.
pub const METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Menu shortcut for each entry of [`METHODS`].
const METHOD_KEYS: [char; 7] = ['g', 'p', 'u', 'a', 'd', 'h', 'o'];

const DEFAULT_URL: &str = "https://www.google.com";

// ---------------------------------------------------------------------------
// RequestDraft
// ---------------------------------------------------------------------------

/// The request being assembled: what the screen hands to whoever sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub method: String,
    pub url: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            method: METHODS[0].to_owned(),
            url: DEFAULT_URL.to_owned(),
        }
    }
}

impl RequestDraft {
    /// The request line shown in the status bar.
    pub fn summary(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

// ---------------------------------------------------------------------------
// RequestIds
// ---------------------------------------------------------------------------

/// Handles to the widgets of the request screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIds {
    pub root: WidgetId,
    pub pages: WidgetId,
    pub home: WidgetId,
    pub headers_page: WidgetId,
    pub method: WidgetId,
    pub url: WidgetId,
    pub headers: WidgetId,
    pub query: WidgetId,
    pub body: WidgetId,
    pub menu: WidgetId,
    pub status: WidgetId,
}

impl RequestIds {
    /// Read the current method and URL off the screen.
    pub fn draft(&self, screen: &Screen) -> RequestDraft {
        let value = |id| {
            screen
                .get::<LabeledField>(id)
                .map(|field| field.value().to_owned())
                .unwrap_or_default()
        };
        RequestDraft {
            method: value(self.method),
            url: value(self.url),
        }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build the request screen for a `width` x `height` grid, starting from
/// `draft`. The home page is shown and focused.
pub fn build(width: u16, height: u16, draft: &RequestDraft) -> (Screen, RequestIds) {
    let mut screen = Screen::new(width, height);
    let root = screen.mount_root(View::new);

    let pages = screen.mount(root, MultiView::new);
    let home = screen.mount(pages, View::new);
    let third = |column| ColumnSpan::new(column, 1, 3);
    let method = screen.mount(home, |area| {
        LabeledField::new(area, 0, third(0), "[M]ETHOD", draft.method.as_str())
    });
    let url = screen.mount(home, |area| {
        LabeledField::new(area, 0, ColumnSpan::new(1, 2, 3), "[U]RL", draft.url.as_str())
    });
    let headers = screen.mount(home, |area| {
        LabeledField::new(area, 2, third(0), "[H]EADERS", "+0 ~0 -0")
    });
    let query = screen.mount(home, |area| {
        LabeledField::new(area, 2, third(1), "[Q]UERY", "0 parameters")
    });
    let body = screen.mount(home, |area| LabeledField::new(area, 2, third(2), "[B]ODY", "N/A"));

    let headers_page = screen.mount(pages, View::new);
    screen.mount(headers_page, |area| {
        Label::new(area.child(0, 0, 0, 1), pad("HEADERS", area.width.max(0) as usize)).reversed()
    });
    screen.mount(headers_page, |area| {
        Label::new(area.child(1, 2, 0, 1), "No headers yet. Enter goes back.")
    });

    let menu = screen.mount(root, |area| {
        let rows = (METHODS.len() as i32 + 1).min((area.height - 2).max(2));
        ScrollBox::new(area.band(1, third(0), rows), "METHOD", METHODS)
    });
    let status = screen.mount(root, |area| {
        Label::new(area.child(0, area.height - 1, 0, 1), draft.summary())
    });

    let ids = RequestIds {
        root,
        pages,
        home,
        headers_page,
        method,
        url,
        headers,
        query,
        body,
        menu,
        status,
    };

    screen.hide(menu);
    screen.show_page(pages, home);
    if let Some(list) = screen.get_mut::<ScrollBox>(menu) {
        list.scroll_to_value(&draft.method);
    }
    wire(&mut screen, ids);
    screen.focus_on(home);
    debug!(width, height, "request screen built");
    (screen, ids)
}

/// Install key handlers and hooks.
fn wire(screen: &mut Screen, ids: RequestIds) {
    let shortcut = |screen: &Screen, field| {
        screen
            .get::<LabeledField>(field)
            .and_then(|f| accelerator(f.label()))
    };

    if let Some(ch) = shortcut(screen, ids.method) {
        screen.bind(ids.home, Key::Char(ch), move |screen, _| open_menu(screen, ids));
    }
    for field in [ids.url, ids.query, ids.body] {
        if let Some(ch) = shortcut(screen, field) {
            screen.bind(ids.home, Key::Char(ch), move |screen, _| {
                screen.start_editing(field);
            });
        }
    }
    if let Some(ch) = shortcut(screen, ids.headers) {
        screen.bind(ids.home, Key::Char(ch), move |screen, _| {
            screen.show_page(ids.pages, ids.headers_page);
            screen.focus_on(ids.headers_page);
        });
    }
    screen.bind(ids.headers_page, Key::Enter, move |screen, _| {
        screen.show_page(ids.pages, ids.home);
        screen.focus_on(ids.home);
    });

    for (index, ch) in METHOD_KEYS.into_iter().enumerate() {
        screen.bind(ids.menu, Key::Char(ch), move |screen, menu| {
            screen.scroll_to(menu, index as isize);
            close_menu(screen, ids);
        });
    }
    screen.bind(ids.menu, Key::Enter, move |screen, _| close_menu(screen, ids));

    screen.on_change(ids.menu, move |screen, menu| {
        let choice = screen
            .get::<ScrollBox>(menu)
            .and_then(|list| list.selected_item())
            .map(str::to_owned);
        if let (Some(choice), Some(field)) = (choice, screen.get_mut::<LabeledField>(ids.method)) {
            field.set_value(choice);
        }
        refresh_status(screen, ids);
    });
    screen.on_change(ids.url, move |screen, _| refresh_status(screen, ids));
}

fn open_menu(screen: &mut Screen, ids: RequestIds) {
    let current = ids.draft(screen).method;
    screen.show(ids.menu);
    screen.scroll_to_value(ids.menu, &current);
    screen.focus_on(ids.menu);
}

fn close_menu(screen: &mut Screen, ids: RequestIds) {
    screen.hide(ids.menu);
    screen.focus_on(ids.home);
}

fn refresh_status(screen: &mut Screen, ids: RequestIds) {
    let summary = ids.draft(screen).summary();
    if let Some(label) = screen.get_mut::<Label>(ids.status) {
        label.set_text(summary);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Region;
    use pretty_assertions::assert_eq;

    fn screen() -> (Screen, RequestIds) {
        build(80, 24, &RequestDraft::default())
    }

    fn value(screen: &Screen, id: WidgetId) -> String {
        screen.get::<LabeledField>(id).unwrap().value().to_owned()
    }

    #[test]
    fn starts_on_focused_home() {
        let (screen, ids) = screen();
        assert_eq!(screen.focused(), Some(ids.home));
        assert!(!screen.is_visible(ids.menu));
        assert_eq!(screen.get::<MultiView>(ids.pages).unwrap().shown(), Some(ids.home));
        assert_eq!(ids.draft(&screen), RequestDraft::default());
    }

    #[test]
    fn menu_sits_under_method() {
        let (screen, ids) = screen();
        assert_eq!(screen.region(ids.menu), Some(Region::new(0, 1, 27, 8)));
        let (small, ids) = build(20, 5, &RequestDraft::default());
        assert_eq!(small.region(ids.menu), Some(Region::new(0, 1, 7, 3)));
    }

    #[test]
    fn menu_letter_picks_method() {
        let (mut screen, ids) = screen();
        screen.dispatch_key(Key::Char('m'));
        assert_eq!(screen.focused(), Some(ids.menu));
        assert!(screen.is_visible(ids.menu));

        screen.dispatch_key(Key::Char('a'));
        assert_eq!(value(&screen, ids.method), "PATCH");
        assert_eq!(screen.focused(), Some(ids.home));
        assert!(!screen.is_visible(ids.menu));
        assert_eq!(
            screen.get::<Label>(ids.status).unwrap().text(),
            "PATCH https://www.google.com"
        );
    }

    #[test]
    fn menu_arrows_mirror_selection() {
        let (mut screen, ids) = screen();
        screen.dispatch_key(Key::Char('m'));
        screen.dispatch_key(Key::Down);
        screen.dispatch_key(Key::Down);
        assert_eq!(value(&screen, ids.method), "PUT");
        screen.dispatch_key(Key::Enter);
        assert_eq!(screen.focused(), Some(ids.home));
        assert_eq!(ids.draft(&screen).method, "PUT");
    }

    #[test]
    fn reopening_menu_selects_current_method() {
        let (mut screen, ids) = screen();
        screen.dispatch_key(Key::Char('m'));
        screen.dispatch_key(Key::Char('d'));
        screen.dispatch_key(Key::Char('m'));
        assert_eq!(screen.get::<ScrollBox>(ids.menu).unwrap().selected(), 4);
    }

    #[test]
    fn url_shortcut_edits_url() {
        let (mut screen, ids) = screen();
        screen.dispatch_key(Key::Char('u'));
        assert_eq!(screen.focused(), Some(ids.url));
        for ch in "/search".chars() {
            screen.dispatch_key(Key::Char(ch));
        }
        screen.dispatch_key(Key::Enter);
        assert_eq!(screen.focused(), Some(ids.home));
        assert_eq!(ids.draft(&screen).url, "https://www.google.com/search");
        assert_eq!(
            screen.get::<Label>(ids.status).unwrap().text(),
            "GET https://www.google.com/search"
        );
    }

    #[test]
    fn every_marked_home_label_is_bound() {
        let (screen, ids) = screen();
        let keys = &screen.dom().get(ids.home).unwrap().keys;
        for field in [ids.method, ids.url, ids.headers, ids.query, ids.body] {
            let label = screen.get::<LabeledField>(field).unwrap().label();
            let ch = accelerator(label).unwrap();
            assert!(keys.contains(Key::Char(ch)), "{label} has no binding");
        }
    }

    #[test]
    fn query_and_body_shortcuts_edit_their_fields() {
        let (mut screen, ids) = screen();
        assert!(screen.dispatch_key(Key::Char('q')));
        assert_eq!(screen.focused(), Some(ids.query));
        assert!(screen.get::<LabeledField>(ids.query).unwrap().is_editing());
        screen.dispatch_key(Key::Enter);
        assert_eq!(screen.focused(), Some(ids.home));

        assert!(screen.dispatch_key(Key::Char('b')));
        assert_eq!(screen.focused(), Some(ids.body));
        for ch in "{}".chars() {
            screen.dispatch_key(Key::Char(ch));
        }
        screen.dispatch_key(Key::Enter);
        assert_eq!(value(&screen, ids.body), "N/A{}");
        assert_eq!(screen.focused(), Some(ids.home));
    }

    #[test]
    fn menu_keys_do_not_fire_while_hidden() {
        let (mut screen, ids) = screen();
        // 'p' only exists in the hidden menu's table
        assert!(!screen.dispatch_key(Key::Char('p')));
        assert_eq!(value(&screen, ids.method), "GET");
    }

    #[test]
    fn headers_page_round_trip() {
        let (mut screen, ids) = screen();
        screen.dispatch_key(Key::Char('h'));
        assert_eq!(screen.get::<MultiView>(ids.pages).unwrap().shown(), Some(ids.headers_page));
        // home shortcuts are out of reach on the headers page
        assert!(!screen.dispatch_key(Key::Char('u')));
        screen.dispatch_key(Key::Enter);
        assert_eq!(screen.get::<MultiView>(ids.pages).unwrap().shown(), Some(ids.home));
        assert_eq!(screen.focused(), Some(ids.home));
    }

    #[test]
    fn custom_draft_seeds_fields_and_menu() {
        let draft = RequestDraft {
            method: "DELETE".to_owned(),
            url: "http://localhost/x".to_owned(),
        };
        let (screen, ids) = build(80, 24, &draft);
        assert_eq!(ids.draft(&screen), draft);
        assert_eq!(screen.get::<ScrollBox>(ids.menu).unwrap().selected(), 4);
    }
}
