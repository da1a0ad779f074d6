//! Single-line meters redrawn in place, drawn with indicatif.

mod loader;
mod progress;
mod target;

pub use loader::Loader;
pub use progress::Progress;
