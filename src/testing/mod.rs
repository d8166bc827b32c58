//! Headless testing framework: TestBackend, Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) without a real
//! terminal, and [`render_to_string`] and related helpers to capture frames as
//! plain text for snapshot-style assertions.

pub mod backend;
pub mod pilot;
pub mod snapshot;

pub use backend::TestBackend;
pub use pilot::Pilot;
pub use snapshot::{compositor_to_string, highlights_to_string, render_to_string};
