//! Numeric entry.

use std::fmt;

use textui_render::{Terminal, Value};

use crate::entry::{prompt_until, Entry};
use crate::InputError;

type NumberParser = Box<dyn Fn(&str) -> Result<Value, InputError>>;

/// Kind of number produced by the default parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberKind {
    #[default]
    Float,
    /// Fractions are truncated toward zero.
    Integer,
}

/// Reads a number, tolerating currency signs, spaces and separators.
///
/// The default parser keeps only digits and the two separators, drops the
/// thousands separator, reads the decimal point as `.`, optionally rounds to
/// a number of decimals and yields a [`Value::Float`] or [`Value::Integer`].
///
/// ```rust
/// use textui_input::{Entry, NumberEntry};
/// use textui_render::{MockTerminal, Value};
///
/// let mut term = MockTerminal::new(80, 24).with_responses(["R$ 1.234,5"]);
/// let mut entry = NumberEntry::new("Price: ").decimal_point(',').thousands_sep('.');
/// assert_eq!(entry.read(&mut term).unwrap(), Value::Float(1234.5));
/// ```
pub struct NumberEntry {
    label: String,
    decimal_point: char,
    thousands_sep: Option<char>,
    decimals: Option<i32>,
    kind: NumberKind,
    parser: Option<NumberParser>,
    invalid_message: Option<String>,
}

impl fmt::Debug for NumberEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberEntry")
            .field("label", &self.label)
            .field("decimal_point", &self.decimal_point)
            .field("thousands_sep", &self.thousands_sep)
            .field("decimals", &self.decimals)
            .field("kind", &self.kind)
            .field("parser", &self.parser.is_some())
            .finish()
    }
}

impl NumberEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            decimal_point: '.',
            thousands_sep: Some(','),
            decimals: None,
            kind: NumberKind::Float,
            parser: None,
            invalid_message: None,
        }
    }

    pub fn decimal_point(mut self, c: char) -> Self {
        self.decimal_point = c;
        self
    }

    pub fn thousands_sep(mut self, c: char) -> Self {
        self.thousands_sep = Some(c);
        self
    }

    /// Do not treat any character as a thousands separator.
    pub fn no_thousands_sep(mut self) -> Self {
        self.thousands_sep = None;
        self
    }

    /// Round to this many decimal places.
    pub fn decimals(mut self, decimals: i32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn kind(mut self, kind: NumberKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the default parser entirely.
    pub fn parser(mut self, parser: impl Fn(&str) -> Result<Value, InputError> + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Ask again, showing `message`, when the answer is not a number.
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    /// Parse `input` the way [`read`](Entry::read) does.
    pub fn parse(&self, input: &str) -> Result<Value, InputError> {
        match &self.parser {
            Some(parser) => parser(input),
            None => self.default_parse(input),
        }
    }

    fn default_parse(&self, input: &str) -> Result<Value, InputError> {
        let normalized: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
            .filter(|c| Some(*c) != self.thousands_sep)
            .map(|c| if c == self.decimal_point { '.' } else { c })
            .collect();

        let mut number: f64 = normalized
            .parse()
            .map_err(|_| InputError::InvalidNumber(input.to_string()))?;
        if let Some(decimals) = self.decimals {
            let factor = 10f64.powi(decimals);
            number = (number * factor).round() / factor;
        }
        Ok(match self.kind {
            NumberKind::Float => Value::Float(number),
            NumberKind::Integer => Value::Integer(number.trunc() as i64),
        })
    }
}

impl Entry for NumberEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        prompt_until(term, &self.label, self.invalid_message.as_deref(), |answer| {
            self.parse(answer)
        })
    }
}
