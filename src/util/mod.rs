//! Utility modules for epview.

mod text;

pub use text::{bar, centered_col, char_width, repeat_to_width, truncate};
