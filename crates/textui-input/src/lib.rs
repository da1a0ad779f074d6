//! Line-oriented entry widgets for terminal forms.
//!
//! `textui-input` provides the input half of the TextUI toolkit. Every
//! widget implements [`Entry`]: it writes its label to a
//! [`Terminal`](textui_render::Terminal), blocks on whole lines of input and
//! returns one typed [`Value`](textui_render::Value).
//!
//! # Widgets
//!
//! | Entry | Answer |
//! |-------|--------|
//! | [`TextEntry`] | trimmed text |
//! | [`PasswordEntry`] | text read without echo |
//! | [`NumberEntry`] | float or integer, separator aware |
//! | [`DateEntry`] | date parsed with a chrono format |
//! | [`SingleSelector`] | label (or key) of one option |
//! | [`MultiSelector`] | list of toggled options |
//! | [`TextMultiLineEntry`] | list of lines up to a blank one |
//! | [`HiddenEntry`] | fixed value, never prompted |
//! | [`ReadOnlyEntry`] | fixed value, shown to the user |
//!
//! # Testing
//!
//! Entries take `&mut dyn Terminal`, so tests drive them with a scripted
//! [`MockTerminal`](textui_render::MockTerminal):
//!
//! ```
//! use textui_input::{Entry, NumberEntry};
//! use textui_render::{MockTerminal, Value};
//!
//! let mut term = MockTerminal::new(80, 24).with_responses(["1,024"]);
//! let answer = NumberEntry::new("Size: ").read(&mut term).unwrap();
//! assert_eq!(answer, Value::Float(1024.0));
//! ```

mod entry;
mod error;
pub mod sources;

pub use entry::{prompt_line, Entry};
pub use error::InputError;

pub use sources::{
    DateEntry, HiddenEntry, MultiSelector, NumberEntry, NumberKind, PasswordEntry, ReadOnlyEntry,
    SingleSelector, TextEntry, TextMultiLineEntry,
};
