//! Error types for the CRUD screen and the form orchestrator.
//!
//! Only configuration and environment failures become errors. Typos at the
//! command prompt (unknown commands, missing pages, actions that need a
//! selection) set the status line instead and the screen keeps running.

use std::io;

use textui_input::InputError;
use textui_render::RenderError;

/// Errors raised by [`Crud`](crate::Crud).
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// Two actions or navigation commands share a key.
    #[error("key '{0}' is bound more than once")]
    DuplicateKey(char),

    /// A key that can never be typed as a command (digits select rows).
    #[error("key '{0}' cannot be bound to a command")]
    ReservedKey(char),

    /// A column weight outside `(0, 1]`, or no width left for unweighted columns.
    #[error("column '{column}' has invalid width weight {weight}")]
    InvalidWeight { column: String, weight: f64 },

    /// The terminal is narrower than the configured minimum.
    #[error("terminal has {actual} columns, at least {required} are needed")]
    TerminalTooNarrow { required: usize, actual: usize },

    /// Input ended while waiting for a command.
    #[error("input closed while waiting for a command")]
    InputClosed,

    /// An action handler failed.
    #[error("action handler failed: {0}")]
    Handler(#[source] anyhow::Error),

    /// A command pattern could not be compiled.
    #[error("invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Screen text could not be parsed.
    #[error("invalid screen text: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by [`Form`](crate::Form).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// `ask` was called on a form without entries.
    #[error("No entry is defined for the form.")]
    NoEntriesDefined,

    /// An answer has a type the review table cannot show.
    #[error("answer '{id}' has type {type_name}, which cannot be reviewed")]
    InvalidAnswerType { id: String, type_name: &'static str },

    /// The review date pattern has an invalid specifier.
    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    /// Two review buttons share a key.
    #[error("review button key '{0}' is used more than once")]
    DuplicateKey(char),

    /// Form text could not be parsed.
    #[error("invalid form text: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl FormError {
    /// Whether the user ended input instead of answering.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Input(InputError::PromptCancelled))
    }
}
