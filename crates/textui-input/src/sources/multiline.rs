//! Multi-line text entry.

use textui_render::{Terminal, Value};

use crate::entry::Entry;
use crate::InputError;

/// Collects lines until a blank one (or end of input) and answers with the
/// list of trimmed lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMultiLineEntry {
    label: String,
}

impl TextMultiLineEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Entry for TextMultiLineEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        term.write_line(&self.label)?;
        let mut lines = Vec::new();
        while let Some(line) = term.read_trimmed()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(Value::List(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textui_render::MockTerminal;

    #[test]
    fn blank_line_finishes() {
        let mut term =
            MockTerminal::new(80, 24).with_responses(["first", "  second ", "", "not read"]);
        let answer = TextMultiLineEntry::new("Notes:").read(&mut term).unwrap();
        assert_eq!(answer, Value::List(vec!["first".into(), "second".into()]));
        assert_eq!(term.output(), "Notes:\n");
        assert_eq!(term.pending_responses(), 1);
    }

    #[test]
    fn end_of_input_finishes() {
        let mut term = MockTerminal::new(80, 24).with_responses(["only"]);
        let answer = TextMultiLineEntry::new("Notes:").read(&mut term).unwrap();
        assert_eq!(answer.to_string(), "only");
    }
}
