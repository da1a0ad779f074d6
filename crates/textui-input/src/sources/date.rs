//! Date entry.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use textui_render::{Terminal, Value};

use crate::entry::{prompt_until, Entry};
use crate::InputError;

type PreParser = Box<dyn Fn(&str) -> String>;

/// Reads a date in a chrono format such as `%Y-%m-%d` or `%d/%m/%Y %H:%M`.
///
/// Formats without a time part yield midnight. A pre-parser can rewrite the
/// raw answer first, e.g. to accept `today`.
///
/// ```rust
/// use textui_input::{DateEntry, Entry};
/// use textui_render::{MockTerminal, Value};
///
/// let mut term = MockTerminal::new(80, 24).with_responses(["09/03/2024"]);
/// let answer = DateEntry::new("Due: ", "%d/%m/%Y").read(&mut term).unwrap();
/// assert_eq!(answer.to_string(), "2024-03-09");
/// ```
pub struct DateEntry {
    label: String,
    format: String,
    pre_parser: Option<PreParser>,
    invalid_message: Option<String>,
}

impl fmt::Debug for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateEntry")
            .field("label", &self.label)
            .field("format", &self.format)
            .field("pre_parser", &self.pre_parser.is_some())
            .finish()
    }
}

impl DateEntry {
    pub fn new(label: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            format: format.into(),
            pre_parser: None,
            invalid_message: None,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Rewrite the answer before it is parsed.
    pub fn pre_parser(mut self, parser: impl Fn(&str) -> String + 'static) -> Self {
        self.pre_parser = Some(Box::new(parser));
        self
    }

    /// Ask again, showing `message`, when the answer does not parse.
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    pub fn parse(&self, input: &str) -> Result<NaiveDateTime, InputError> {
        let input = match &self.pre_parser {
            Some(parser) => parser(input),
            None => input.to_string(),
        };
        NaiveDateTime::parse_from_str(&input, &self.format)
            .or_else(|_| {
                NaiveDate::parse_from_str(&input, &self.format)
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .map_err(|_| InputError::date(input.as_str(), self.format.as_str()))
    }
}

impl Entry for DateEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        prompt_until(term, &self.label, self.invalid_message.as_deref(), |answer| {
            self.parse(answer).map(Value::Date)
        })
    }
}
