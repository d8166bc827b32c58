//! Rendering pipeline: strips, compositor, clipped canvas, terminal backend.

pub mod backend;
pub mod canvas;
pub mod compositor;
pub mod driver;
pub mod strip;

pub use backend::{Backend, Cursor, CursorShape};
pub use canvas::Canvas;
pub use compositor::{CellUpdate, Compositor};
pub use driver::CrosstermBackend;
pub use strip::{CellStyle, Strip, StyledCell};
