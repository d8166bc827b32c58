//! App: configuration and the frame loop.
//!
//! Each iteration renders the screen, sends the cells that changed since the
//! previous frame to the backend, places the hardware cursor, flushes, then
//! blocks for one input event and dispatches it.

use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::event::{InputEvent, KeyEvent, Modifiers};
use crate::render::{Backend, Compositor};
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Optional app title, used in logs.
    pub title: Option<String>,
    /// Key that stops the loop.
    pub exit_key: KeyEvent,
    /// Smallest usable grid `(width, height)`.
    pub min_size: (u16, u16),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: None,
            exit_key: KeyEvent::ctrl('c'),
            min_size: (20, 5),
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the exit key (builder).
    pub fn with_exit_key(mut self, key: KeyEvent) -> Self {
        self.exit_key = key;
        self
    }

    /// Set the minimum grid size (builder).
    pub fn with_min_size(mut self, width: u16, height: u16) -> Self {
        self.min_size = (width, height);
        self
    }

    /// Fail with [`Error::TerminalTooSmall`] when `width` x `height` is below
    /// the minimum.
    pub fn check_size(&self, width: u16, height: u16) -> Result<()> {
        let (min_width, min_height) = self.min_size;
        if width < min_width || height < min_height {
            return Err(Error::TerminalTooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// Owns the screen, the last frame sent to the terminal and the config.
pub struct App {
    /// The widget tree and focus.
    pub screen: Screen,
    /// Application configuration.
    pub config: AppConfig,
    /// The frame currently on the terminal. `None` before the first draw.
    previous: Option<Compositor>,
    running: bool,
}

impl App {
    /// Create an app around a built screen.
    pub fn new(screen: Screen, config: AppConfig) -> Self {
        Self {
            screen,
            config,
            previous: None,
            running: true,
        }
    }

    /// Whether the loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop after the current iteration.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// The frame currently on the terminal.
    pub fn last_frame(&self) -> Option<&Compositor> {
        self.previous.as_ref()
    }

    /// Run until the exit key arrives or input closes.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> Result<()> {
        let (width, height) = backend.size()?;
        self.config.check_size(width, height)?;
        info!(title = ?self.config.title, width, height, "app started");
        while self.running {
            if !self.step(backend)? {
                break;
            }
        }
        info!("app stopped");
        Ok(())
    }

    /// One loop iteration: draw, then wait for and handle one event.
    ///
    /// Returns `false` once the loop should end.
    pub fn step<B: Backend>(&mut self, backend: &mut B) -> Result<bool> {
        self.draw(backend)?;
        match backend.read_event() {
            Ok(Some(event)) => self.handle_input(event),
            Ok(None) => trace!("unsupported input skipped"),
            Err(Error::InputClosed) => {
                debug!("input closed");
                self.running = false;
            }
            Err(err) => return Err(err),
        }
        Ok(self.running)
    }

    /// Render the screen and send it to the backend.
    ///
    /// The first frame clears the terminal and sends every cell; later frames
    /// send only the cells that changed.
    pub fn draw<B: Backend>(&mut self, backend: &mut B) -> Result<()> {
        let frame = self.screen.render_frame();
        match &self.previous {
            Some(previous) => backend.draw(&frame.diff(previous))?,
            None => {
                backend.clear()?;
                backend.draw(&frame.all_cells())?;
            }
        }
        backend.set_cursor(self.screen.cursor())?;
        backend.flush()?;
        self.previous = Some(frame);
        Ok(())
    }

    /// Handle one input event.
    ///
    /// The exit key stops the loop. Other keys carrying Ctrl or Alt are
    /// dropped; the rest go to [`Screen::dispatch_key`].
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) if key == self.config.exit_key => {
                debug!("exit key pressed");
                self.quit();
            }
            InputEvent::Key(key) => {
                if key.modifiers.contains(Modifiers::CTRL) || key.modifiers.contains(Modifiers::ALT) {
                    trace!(?key, "modified key ignored");
                    return;
                }
                let consumed = self.screen.dispatch_key(key.code);
                trace!(?key, consumed, "key dispatched");
            }
            InputEvent::Resize { width, height } => {
                warn!(width, height, "terminal resized; layout is fixed at startup");
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
