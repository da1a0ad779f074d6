//! Column layout for bordered terminal tables.
//!
//! The engine works in three steps:
//!
//! 1. [`resolve_widths`] turns the available width into one absolute width
//!    per column, either by equal division or from weights.
//! 2. [`render_cell`] splits a cell into paragraphs no wider than the
//!    column's content width and pads each one to exactly that width.
//! 3. [`Table`] composes header, body and footer rows, lining up the
//!    paragraphs of each row and drawing the separators.
//!
//! Each column loses [`CELL_OVERHEAD`] columns to its border and padding, so
//! a column must be at least five wide.
//!
//! ```rust
//! use textui_render::tabular::{resolve_widths, render_cell, Align};
//!
//! let widths = resolve_widths(30, 3, None).unwrap();
//! assert_eq!(widths.widths, vec![10, 10, 10]);
//!
//! let lines = render_cell("ab", 6, Align::Center).unwrap();
//! assert_eq!(lines, vec!["  ab  "]);
//! ```

mod cell;
mod decorator;
mod resolve;
mod types;

pub use cell::render_cell;
pub use decorator::{Table, CELL_OVERHEAD};
pub use resolve::{normalize_weights, resolve_widths, ResolvedWidths};
pub use types::{Align, Borders};
