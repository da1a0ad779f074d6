//! Error types for layout and terminal output.
//!
//! [`RenderError`] covers the two failure families of this crate: layout
//! configuration mistakes (widths, column counts, weights), which are fatal at
//! configuration time, and environment failures (unknown platform, terminal
//! size not detectable, I/O).

use std::io;

/// Errors that can occur while laying out or drawing output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A paragraph width below 1 was requested.
    #[error("width must be at least 1, got {0}")]
    InvalidWidth(usize),

    /// A column is too narrow to hold its borders and padding.
    #[error("column {column} is {width} wide, leaving no room for content")]
    InvalidColumnWidth { column: usize, width: usize },

    /// Header, footer, width vector or a row disagrees with the data column count.
    #[error("{section} has {found} columns, expected {expected}")]
    MismatchedColumnCount {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    /// The table has neither data nor a header to derive columns from.
    #[error("table has no columns")]
    NoColumns,

    /// A width weight is not a positive finite number.
    #[error("invalid width weight {weight} for column {column}")]
    InvalidWeight { column: usize, weight: f64 },

    /// The operating system is not one we know how to query.
    #[error("Operating System unknown.")]
    UnknownPlatform,

    /// The terminal size could not be detected.
    #[error("terminal size could not be detected")]
    TerminalSizeUnavailable,

    /// A progress meter maximum was zero or negative.
    #[error("maximum value cannot be less than or equal to zero: {0}")]
    InvalidMaximum(f64),

    /// A progress value went backwards or past the maximum.
    #[error("value {value} is outside {min}..={max}")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    /// A meter line template was rejected by indicatif.
    #[error("invalid meter template: {0}")]
    Template(#[from] indicatif::style::TemplateError),

    /// Writing to or reading from the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    /// Create a column count mismatch error.
    pub fn mismatch(section: &'static str, expected: usize, found: usize) -> Self {
        Self::MismatchedColumnCount {
            section,
            expected,
            found,
        }
    }

    /// Whether this error comes from the environment rather than configuration.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlatform | Self::TerminalSizeUnavailable | Self::Io(_)
        )
    }
}
