//! Horizontal rule.

use crate::terminal::Terminal;
use crate::util::display_width;
use crate::RenderError;

/// A line made of a repeated pattern, as wide as the terminal.
///
/// The pattern may be longer than one character; it is repeated
/// `columns / pattern width` times, so a partial pattern is never drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HorizontalRule {
    pattern: String,
}

impl Default for HorizontalRule {
    fn default() -> Self {
        Self::new("-")
    }
}

impl HorizontalRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The rule for a terminal `columns` wide, without a line break.
    pub fn render(&self, columns: usize) -> String {
        let width = display_width(&self.pattern);
        if width == 0 {
            return String::new();
        }
        self.pattern.repeat(columns / width)
    }

    /// Write the rule at the terminal's width, followed by a line break.
    pub fn draw(&self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        let line = self.render(term.columns()?);
        term.write_line(&line)?;
        Ok(())
    }
}
