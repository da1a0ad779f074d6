//! Entry widget implementations.

mod date;
mod fixed;
mod multiline;
mod number;
mod select;
mod text;

pub use date::DateEntry;
pub use fixed::{HiddenEntry, ReadOnlyEntry};
pub use multiline::TextMultiLineEntry;
pub use number::{NumberEntry, NumberKind};
pub use select::{MultiSelector, SingleSelector};
pub use text::{PasswordEntry, TextEntry};
