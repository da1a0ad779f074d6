//! Static output widgets sized to the terminal width.

mod rule;
mod text_box;

pub use rule::HorizontalRule;
pub use text_box::{BoxChars, TextBox};
