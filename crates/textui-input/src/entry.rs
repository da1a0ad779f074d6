//! The entry abstraction shared by every input widget.

use textui_render::{Terminal, Value};

use crate::InputError;

/// A single-field input widget producing one typed answer per read.
///
/// Entries write their own prompt and block on whole lines of input from the
/// terminal. End of input surfaces as [`InputError::PromptCancelled`].
pub trait Entry {
    /// Label shown when prompting and in form review tables.
    fn label(&self) -> &str;

    /// Prompt the user and return the answer.
    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError>;

    /// Whether the answer belongs in a review table.
    fn reviewable(&self) -> bool {
        true
    }
}

impl<E: Entry + ?Sized> Entry for Box<E> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        (**self).read(term)
    }

    fn reviewable(&self) -> bool {
        (**self).reviewable()
    }
}

/// Write `prompt` and read one trimmed line.
pub fn prompt_line(term: &mut dyn Terminal, prompt: &str) -> Result<String, InputError> {
    term.write(prompt)?;
    term.read_trimmed()?.ok_or(InputError::PromptCancelled)
}

/// Keep prompting until `parse` accepts the answer.
///
/// Retryable errors print `invalid_message` and ask again when a message is
/// set; otherwise they are returned.
pub(crate) fn prompt_until<T>(
    term: &mut dyn Terminal,
    prompt: &str,
    invalid_message: Option<&str>,
    mut parse: impl FnMut(&str) -> Result<T, InputError>,
) -> Result<T, InputError> {
    loop {
        let answer = prompt_line(term, prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => match invalid_message {
                Some(message) => term.write_line(message)?,
                None => return Err(err),
            },
            Err(err) => return Err(err),
        }
    }
}
