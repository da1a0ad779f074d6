//! Entries whose answer is fixed in advance.

use textui_render::{Terminal, Value};

use crate::entry::Entry;
use crate::InputError;

/// Answers with a fixed value without prompting; never shown in review.
///
/// Useful for ids and timestamps a form should carry along.
#[derive(Clone, Debug, PartialEq)]
pub struct HiddenEntry {
    value: Value,
}

impl HiddenEntry {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Entry for HiddenEntry {
    fn label(&self) -> &str {
        ""
    }

    fn read(&mut self, _term: &mut dyn Terminal) -> Result<Value, InputError> {
        Ok(self.value.clone())
    }

    fn reviewable(&self) -> bool {
        false
    }
}

/// Shows `label` followed by a fixed value and answers with that value.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadOnlyEntry {
    label: String,
    value: Value,
}

impl ReadOnlyEntry {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Entry for ReadOnlyEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        term.write_line(&format!("{}{}", self.label, self.value))?;
        Ok(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textui_render::MockTerminal;

    #[test]
    fn hidden_reads_nothing() {
        let mut term = MockTerminal::new(80, 24).with_responses(["unused"]);
        let mut entry = HiddenEntry::new(7);
        assert_eq!(entry.read(&mut term).unwrap(), Value::Integer(7));
        assert_eq!(term.output(), "");
        assert_eq!(term.pending_responses(), 1);
        assert!(!entry.reviewable());
    }

    #[test]
    fn read_only_prints_value() {
        let mut term = MockTerminal::new(80, 24);
        let mut entry = ReadOnlyEntry::new("Id: ", 42);
        assert_eq!(entry.read(&mut term).unwrap(), Value::Integer(42));
        assert_eq!(term.output(), "Id: 42\n");
        assert!(entry.reviewable());
    }
}
