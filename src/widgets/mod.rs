//! Built-in widgets: Label, LabeledField, ScrollBox, View, MultiView.

pub mod field;
pub mod label;
pub mod multi_view;
pub mod scroll_box;
pub mod view;

pub use field::{FieldState, LabeledField};
pub use label::Label;
pub use multi_view::MultiView;
pub use scroll_box::ScrollBox;
pub use view::View;
