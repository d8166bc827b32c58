//! Integration tests for reqtui.
//!
//! These tests exercise the public API from outside the crate: widgets mounted
//! on a screen, key dispatch and focus, the frame loop against the test
//! backend, and the request builder screen end to end.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;

use reqtui::app::{App, AppConfig};
use reqtui::event::{Key, KeyEvent};
use reqtui::geometry::{ColumnSpan, Region};
use reqtui::render::Cursor;
use reqtui::request::{self, RequestDraft};
use reqtui::screen::Screen;
use reqtui::testing::{render_to_string, Pilot, TestBackend};
use reqtui::widgets::*;

fn letters() -> Vec<&'static str> {
    vec!["A", "B", "C", "D", "E", "F", "G"]
}

// ---------------------------------------------------------------------------
// ScrollBox
// ---------------------------------------------------------------------------

#[test]
fn scroll_box_down_five_times_from_second_item() {
    let mut screen = Screen::new(20, 8);
    let root = screen.mount_root(View::new);
    // title row plus five item rows
    let list = screen.mount(root, |area| ScrollBox::new(area.child(0, 0, 10, 6), "ABC", letters()));
    screen.focus_on(list);

    assert!(screen.scroll_to(list, 1));
    let state = *screen.get::<ScrollBox>(list).unwrap().state();
    assert_eq!((state.selected(), state.offset()), (1, 0));

    for _ in 0..5 {
        assert!(screen.dispatch_key(Key::Down));
    }
    let state = *screen.get::<ScrollBox>(list).unwrap().state();
    assert_eq!((state.selected(), state.offset()), (6, 2));
}

#[test]
fn scroll_box_change_hook_sees_each_move() {
    let mut screen = Screen::new(20, 8);
    let root = screen.mount_root(View::new);
    let list = screen.mount(root, |area| ScrollBox::new(area.child(0, 0, 10, 4), "ABC", letters()));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    screen.on_change(list, move |screen: &mut Screen, id| {
        let item = screen.get::<ScrollBox>(id).and_then(|l| l.selected_item()).map(str::to_owned);
        log.borrow_mut().extend(item);
    });
    screen.focus_on(list);

    screen.dispatch_key(Key::Down);
    screen.dispatch_key(Key::Down);
    screen.dispatch_key(Key::Up);
    assert!(screen.scroll_to_value(list, "G"));
    assert!(!screen.scroll_to_value(list, "Z"));

    assert_eq!(*seen.borrow(), vec!["B", "C", "B", "G"]);
}

#[test]
fn unfocused_scroll_box_ignores_arrows() {
    let mut screen = Screen::new(20, 8);
    let root = screen.mount_root(View::new);
    let list = screen.mount(root, |area| ScrollBox::new(area.child(0, 0, 10, 4), "ABC", letters()));
    assert!(!screen.dispatch_key(Key::Down));
    assert_eq!(screen.get::<ScrollBox>(list).unwrap().selected(), 0);
}

// ---------------------------------------------------------------------------
// LabeledField
// ---------------------------------------------------------------------------

fn method_screen() -> (Screen, reqtui::dom::WidgetId, reqtui::dom::WidgetId) {
    let mut screen = Screen::new(80, 24);
    let root = screen.mount_root(View::new);
    let field = screen.mount(root, |area| {
        LabeledField::new(area, 0, ColumnSpan::new(0, 1, 3), "[M]ETHOD", "GET")
    });
    screen.focus_on(root);
    (screen, root, field)
}

#[test]
fn editing_home_insert_end_backspace() {
    let (mut screen, root, field) = method_screen();
    assert!(screen.start_editing(field));

    screen.dispatch_key(Key::Home);
    assert_eq!(screen.get::<LabeledField>(field).unwrap().cursor_offset(), -3);
    screen.dispatch_key(Key::Char('X'));
    let f = screen.get::<LabeledField>(field).unwrap();
    assert_eq!((f.value(), f.cursor_offset()), ("XGET", -3));
    screen.dispatch_key(Key::End);
    assert_eq!(screen.get::<LabeledField>(field).unwrap().cursor_offset(), 0);
    screen.dispatch_key(Key::Backspace);
    assert_eq!(screen.get::<LabeledField>(field).unwrap().value(), "XGE");

    screen.dispatch_key(Key::Enter);
    assert_eq!(screen.focused(), Some(root));
    assert!(!screen.get::<LabeledField>(field).unwrap().is_editing());
}

#[test]
fn field_table_overrides_editing_default() {
    let (mut screen, _, field) = method_screen();
    screen.bind(field, Key::Char('q'), |screen: &mut Screen, _| screen.clear_focus());
    screen.start_editing(field);

    screen.dispatch_key(Key::Char('q'));
    assert_eq!(screen.get::<LabeledField>(field).unwrap().value(), "GET");
    assert_eq!(screen.focused(), None);
}

#[test]
fn editing_keys_escalate_to_ancestors() {
    let (mut screen, root, field) = method_screen();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    screen.bind(root, Key::Down, move |_: &mut Screen, _| counter.set(counter.get() + 1));
    screen.start_editing(field);

    // Down means nothing to a field, so the parent's table gets it
    assert!(screen.dispatch_key(Key::Down));
    assert_eq!(hits.get(), 1);
    assert_eq!(screen.focused(), Some(field));
}

#[test]
fn editing_cursor_sits_near_value_midpoint() {
    let (mut screen, _, field) = method_screen();
    screen.start_editing(field);
    // value_x 10, value_width 16, len 3
    assert_eq!(screen.cursor(), Cursor::block(19, 0));
    screen.dispatch_key(Key::Left);
    assert_eq!(screen.cursor(), Cursor::block(18, 0));
    screen.dispatch_key(Key::Enter);
    assert_eq!(screen.cursor(), Cursor::Hidden);
}

// ---------------------------------------------------------------------------
// Focus and dispatch
// ---------------------------------------------------------------------------

#[test]
fn focus_is_exclusive_and_blurs_once_per_transition() {
    let mut screen = Screen::new(20, 5);
    let root = screen.mount_root(View::new);
    let ids: Vec<_> = (0..3)
        .map(|row| screen.mount(root, |area| Label::new(area.child(0, row, 0, 1), "x")))
        .collect();
    let blurs = Rc::new(RefCell::new(Vec::new()));
    for &id in &ids {
        let log = Rc::clone(&blurs);
        screen.on_blur(id, move |_: &mut Screen, id| log.borrow_mut().push(id));
    }

    for &target in &[ids[0], ids[1], ids[1], ids[2], ids[0]] {
        screen.focus_on(target);
        let focused: Vec<_> = ids.iter().filter(|&&id| screen.is_focused(id)).collect();
        assert_eq!(focused, vec![&target]);
    }
    screen.clear_focus();
    assert!(ids.iter().all(|&id| !screen.is_focused(id)));

    assert_eq!(*blurs.borrow(), vec![ids[0], ids[1], ids[1], ids[2], ids[0]]);
}

#[test]
fn parent_binding_shadows_child() {
    let mut screen = Screen::new(20, 5);
    let root = screen.mount_root(View::new);
    let child = screen.mount(root, View::new);
    let parent_hits = Rc::new(Cell::new(0));
    let child_hits = Rc::new(Cell::new(0));
    let p = Rc::clone(&parent_hits);
    screen.bind(root, Key::Char('m'), move |_: &mut Screen, _| p.set(p.get() + 1));
    let c = Rc::clone(&child_hits);
    screen.bind(child, Key::Char('m'), move |_: &mut Screen, _| c.set(c.get() + 1));
    let c = Rc::clone(&child_hits);
    screen.bind(child, Key::Char('n'), move |_: &mut Screen, _| c.set(c.get() + 10));

    assert!(screen.dispatch_key(Key::Char('m')));
    assert_eq!((parent_hits.get(), child_hits.get()), (1, 0));
    assert!(screen.dispatch_key(Key::Char('n')));
    assert_eq!((parent_hits.get(), child_hits.get()), (1, 10));
    assert!(!screen.dispatch_key(Key::Char('z')));
}

#[test]
fn multi_view_limits_dispatch_to_shown_page() {
    let mut screen = Screen::new(20, 5);
    let root = screen.mount_root(MultiView::new);
    let first = screen.mount(root, View::new);
    let second = screen.mount(root, View::new);
    let hits = Rc::new(RefCell::new(Vec::new()));
    for &page in &[first, second] {
        let log = Rc::clone(&hits);
        screen.bind(page, Key::Enter, move |_: &mut Screen, id| log.borrow_mut().push(id));
    }

    assert!(!screen.dispatch_key(Key::Enter));
    assert!(screen.show_page(root, second));
    assert!(screen.dispatch_key(Key::Enter));
    assert!(!screen.show_page(second, first));
    assert_eq!(*hits.borrow(), vec![second]);
}

// ---------------------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------------------

#[test]
fn run_loop_drives_request_screen() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut app = App::new(screen, AppConfig::new().with_title("reqtui"));
    let mut backend = TestBackend::new(60, 6);
    backend.push_key(KeyEvent::plain(Key::Char('m')));
    backend.push_key(KeyEvent::plain(Key::Char('p')));
    backend.push_key(KeyEvent::ctrl('c'));

    app.run(&mut backend).unwrap();

    assert!(!app.is_running());
    assert_eq!(ids.draft(&app.screen).method, "POST");
    assert_eq!(backend.row(5), "POST https://www.google.com");
    assert_eq!(backend.clears(), 1);
}

#[test]
fn run_loop_rejects_tiny_terminal() {
    let (screen, _) = request::build(10, 3, &RequestDraft::default());
    let mut app = App::new(screen, AppConfig::new());
    let mut backend = TestBackend::new(10, 3);
    assert!(matches!(
        app.run(&mut backend),
        Err(reqtui::Error::TerminalTooSmall { width: 10, height: 3, .. })
    ));
}

// ---------------------------------------------------------------------------
// Request screen
// ---------------------------------------------------------------------------

#[test]
fn request_screen_home_frame() {
    let (screen, _) = request::build(60, 6, &RequestDraft::default());
    insta::assert_snapshot!(render_to_string(&screen), @r"
[M]ETHOD:    GET    [U]RL:      https://www.google.com

[H]EADERS: +0 ~0 -0 [Q]UERY: 0 param... [B]ODY:     N/A


GET https://www.google.com
");
}

#[test]
fn request_screen_home_highlights() {
    let (screen, _) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    let mask = pilot.highlights();
    let rows: Vec<&str> = mask.lines().collect();
    assert_eq!(rows[0], format!("{}{}{}{}", " ".repeat(10), "#".repeat(9), " ".repeat(8), "#".repeat(33)));
    assert_eq!(rows[1], "");
    assert_eq!(
        rows[2],
        format!(
            "{}{}{}{}{}{}",
            " ".repeat(11),
            "#".repeat(8),
            " ".repeat(10),
            "#".repeat(10),
            " ".repeat(9),
            "#".repeat(12)
        )
    );
}

#[test]
fn request_screen_menu_frame() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    pilot.press(Key::Char('m'));
    assert_eq!(pilot.screen().region(ids.menu), Some(Region::new(0, 1, 20, 4)));
    insta::assert_snapshot!(pilot.text(), @r"
METHOD:      GET    URL:        https://www.google.com
       METHOD
        GET        ^QUERY:   0 param... BODY:       N/A
       POST
        PUT        v
GET https://www.google.com
");
    let mask = pilot.highlights();
    let rows: Vec<&str> = mask.lines().collect();
    assert_eq!(rows[1], "#".repeat(20));
    assert_eq!(rows[4], format!("{}#", " ".repeat(19)));
}

#[test]
fn request_screen_menu_scrolls_to_options() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    pilot.press(Key::Char('m'));
    pilot.press_all(&[Key::Down; 6]);
    let menu = pilot.screen().get::<ScrollBox>(ids.menu).unwrap();
    assert_eq!((menu.selected(), menu.offset()), (6, 4));
    assert_eq!(menu.selected_item(), Some("OPTIONS"));

    let text = pilot.text();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows[1], "       METHOD");
    assert_eq!(rows[2], "      DELETE       ^QUERY:   0 param... BODY:       N/A");
    assert_eq!(rows[4], "      OPTIONS      v");

    pilot.press(Key::Enter);
    assert_eq!(pilot.screen().focused(), Some(ids.home));
    assert_eq!(ids.draft(pilot.screen()).method, "OPTIONS");
}

#[test]
fn request_screen_url_editing_moves_cursor() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    assert_eq!(pilot.cursor(), Cursor::Hidden);

    pilot.press(Key::Char('u'));
    // value_x 27, value_width 33, len 22
    assert_eq!(pilot.cursor(), Cursor::block(54, 0));
    pilot.type_text("/a");
    assert_eq!(pilot.cursor(), Cursor::block(55, 0));
    pilot.press(Key::Enter);

    assert_eq!(pilot.cursor(), Cursor::Hidden);
    assert_eq!(pilot.screen().focused(), Some(ids.home));
    assert!(pilot.text().ends_with("GET https://www.google.com/a"));
}

#[test]
fn request_screen_shortcut_letters_are_typed_while_editing() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    pilot.press(Key::Char('u'));
    // 'm' and 'h' are home shortcuts but the field captures them
    pilot.type_text("mh");
    pilot.press(Key::Enter);
    assert_eq!(ids.draft(pilot.screen()).url, "https://www.google.commh");
    assert!(!pilot.screen().is_visible(ids.menu));
}

#[test]
fn request_screen_headers_page() {
    let (screen, ids) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    pilot.press(Key::Char('h'));
    assert_eq!(pilot.screen().focused(), Some(ids.headers_page));

    let text = pilot.text();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows[0].trim(), "HEADERS");
    assert_eq!(rows[1], "");
    assert_eq!(rows[2], " No headers yet. Enter goes back.");

    pilot.press(Key::Enter);
    assert!(pilot.text().starts_with("[M]ETHOD:"));
}

#[test]
fn exit_key_stops_pilot() {
    let (screen, _) = request::build(60, 6, &RequestDraft::default());
    let mut pilot = Pilot::new(screen);
    pilot.press_with(Key::Char('c'), reqtui::event::Modifiers::CTRL);
    assert!(!pilot.is_running());
}
