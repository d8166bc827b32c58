//! Widget system: the widget trait and list scroll state.

pub mod scroll;
pub mod traits;

pub use scroll::ListState;
pub use traits::Widget;
