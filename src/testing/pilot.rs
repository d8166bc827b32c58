//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` drives an [`App`] against a [`TestBackend`]: it feeds keys
//! straight into the app and draws frames the same way the frame loop does,
//! so tests can inspect exactly what a terminal would show.

use crate::app::{App, AppConfig};
use crate::event::{InputEvent, Key, KeyEvent, Modifiers};
use crate::render::Cursor;
use crate::screen::Screen;

use super::backend::TestBackend;
use super::snapshot::{compositor_to_string, highlights_to_string};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// ```ignore
/// let mut pilot = Pilot::new(screen);
/// pilot.press(Key::Char('u'));
/// pilot.type_text("/v1");
/// assert!(pilot.text().contains("/v1"));
/// ```
pub struct Pilot {
    app: App,
    backend: TestBackend,
}

impl Pilot {
    /// Drive `screen` with the default config.
    pub fn new(screen: Screen) -> Self {
        Self::with_config(screen, AppConfig::default())
    }

    /// Drive `screen` with `config`.
    pub fn with_config(screen: Screen, config: AppConfig) -> Self {
        let (width, height) = screen.size();
        Self {
            app: App::new(screen, config),
            backend: TestBackend::new(width, height),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press(&mut self, key: Key) {
        self.press_with(key, Modifiers::NONE);
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_with(&mut self, key: Key, modifiers: Modifiers) {
        self.app
            .handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Press each key in order.
    pub fn press_all(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press(key);
        }
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(Key::Char(ch));
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Borrow the screen.
    pub fn screen(&self) -> &Screen {
        &self.app.screen
    }

    /// Borrow the screen mutably.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.app.screen
    }

    /// Whether the app has not been told to exit.
    pub fn is_running(&self) -> bool {
        self.app.is_running()
    }

    /// The test terminal.
    pub fn backend(&self) -> &TestBackend {
        &self.backend
    }

    // ── Render helpers ───────────────────────────────────────────────

    /// Draw a frame onto the test terminal.
    pub fn draw(&mut self) {
        // TestBackend never fails
        let _ = self.app.draw(&mut self.backend);
    }

    /// Draw a frame and return the terminal text, rows right-trimmed.
    pub fn text(&mut self) -> String {
        self.draw();
        compositor_to_string(self.backend.grid())
    }

    /// Draw a frame and return the reverse-video mask.
    pub fn highlights(&mut self) -> String {
        self.draw();
        highlights_to_string(self.backend.grid())
    }

    /// Draw a frame and return the hardware cursor.
    pub fn cursor(&mut self) -> Cursor {
        self.draw();
        self.backend.cursor()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
