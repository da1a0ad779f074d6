//! # TextUI Render - Terminal Layout and Output Widgets
//!
//! `textui-render` is the output half of the TextUI toolkit: it lays out
//! tables, boxes and rules within the detected terminal width and draws
//! single-line meters in place.
//!
//! ## Core Concepts
//!
//! - [`Terminal`]: the collaborator every widget draws to. [`StdTerminal`] is
//!   the process's terminal; [`MockTerminal`] replays scripted input and
//!   captures output for tests.
//! - [`tabular`]: the table engine (width calculator, cell renderer, table
//!   composer).
//! - [`widgets`]: horizontal rule and text box.
//! - [`meter`]: loader and progress meter.
//! - [`Value`] and [`Record`]: the cell values and ordered rows fed to tables
//!   and collected by forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use textui_render::tabular::{Align, Table};
//! use textui_render::MockTerminal;
//!
//! let mut term = MockTerminal::new(40, 24);
//! Table::new(vec![vec!["Xbox", "348"], vec!["Switch", "349.99"]])
//!     .header(["Product", "Price"])
//!     .col_widths([3.0, 1.0])
//!     .align(1, Align::Right)
//!     .draw(&mut term)
//!     .unwrap();
//!
//! assert!(term.output().contains("| Product"));
//! ```
//!
//! All layout functions are pure and take the width as an argument; the
//! `draw` methods only add terminal size detection and writing.

mod error;
pub mod meter;
pub mod tabular;
pub mod terminal;
mod util;
mod value;
pub mod widgets;

pub use error::RenderError;
pub use terminal::{AnsiCommand, MockTerminal, StdTerminal, Terminal};
pub use util::{clip, display_width, fit, pad, split_paragraphs};
pub use value::{Record, Value, DEFAULT_DATE_FORMAT};
