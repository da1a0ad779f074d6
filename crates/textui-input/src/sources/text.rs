//! Free text entries.

use textui_render::{Terminal, Value};

use crate::entry::{prompt_line, Entry};
use crate::InputError;

/// Reads one line of text, trimmed.
///
/// ```rust
/// use textui_input::{Entry, TextEntry};
/// use textui_render::{MockTerminal, Value};
///
/// let mut term = MockTerminal::new(80, 24).with_responses(["  Alice "]);
/// let answer = TextEntry::new("Name: ").read(&mut term).unwrap();
/// assert_eq!(answer, Value::from("Alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEntry {
    label: String,
}

impl TextEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Entry for TextEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        prompt_line(term, &self.label).map(Value::Text)
    }
}

/// Reads one line without echo. Surrounding whitespace is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordEntry {
    label: String,
}

impl PasswordEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Entry for PasswordEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        term.write(&self.label)?;
        let line = term.read_secret_line()?;
        if line.is_empty() {
            return Err(InputError::PromptCancelled);
        }
        Ok(Value::Text(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reviewable(&self) -> bool {
        false
    }
}
