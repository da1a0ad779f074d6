//! Error types for entry widgets.

use std::io;

use textui_render::RenderError;

/// Errors that can occur while reading an entry.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A selector was built without options.
    #[error("Options cannot be empty.")]
    EmptyOptions,

    /// Input ended (Ctrl+D) before an answer was given.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,

    /// The answer could not be read as a number.
    #[error("'{0}' is not a valid number.")]
    InvalidNumber(String),

    /// The answer did not match the expected date format.
    #[error("'{input}' does not match the date format '{format}'.")]
    InvalidDate { input: String, format: String },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The terminal could not be queried or drawn to.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl InputError {
    /// Create an invalid date error.
    pub fn date(input: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            format: format.into(),
        }
    }

    /// Whether the user can fix this by typing a different answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidNumber(_) | Self::InvalidDate { .. })
    }
}
