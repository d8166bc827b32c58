//! Event system: decoded input, key tables, widget command queue.

pub mod binding;
pub mod handler;
pub mod input;

pub use binding::{Callback, KeyMap};
pub use handler::{Command, EventContext};
pub use input::{InputEvent, Key, KeyEvent, Modifiers};
