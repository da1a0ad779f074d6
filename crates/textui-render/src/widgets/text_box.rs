//! Bordered text box.

use crate::tabular::Align;
use crate::terminal::Terminal;
use crate::util::{pad, split_paragraphs};
use crate::RenderError;

/// Border characters of a [`TextBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Default for BoxChars {
    fn default() -> Self {
        BoxChars {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }
}

/// Text framed by a border spanning the full terminal width.
///
/// Content is split into paragraphs of `columns - 4` and aligned inside the
/// frame, centered unless told otherwise.
///
/// ```rust
/// use textui_render::widgets::TextBox;
///
/// let out = TextBox::new("hi").render(10).unwrap();
/// assert_eq!(out, "+--------+\n|   hi   |\n+--------+\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBox {
    content: String,
    chars: BoxChars,
    align: Align,
}

impl TextBox {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            chars: BoxChars::default(),
            align: Align::Center,
        }
    }

    pub fn chars(mut self, chars: BoxChars) -> Self {
        self.chars = chars;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn render(&self, columns: usize) -> Result<String, RenderError> {
        let inner = columns
            .checked_sub(4)
            .filter(|w| *w >= 1)
            .ok_or(RenderError::InvalidColumnWidth {
                column: 0,
                width: columns,
            })?;
        let c = &self.chars;
        let hline: String = std::iter::repeat(c.horizontal).take(columns - 2).collect();

        let mut out = format!("{}{}{}\n", c.top_left, hline, c.top_right);
        for line in split_paragraphs(&self.content, inner)? {
            out.push_str(&format!(
                "{} {} {}\n",
                c.vertical,
                pad(&line, inner, self.align),
                c.vertical
            ));
        }
        out.push_str(&format!("{}{}{}\n", c.bottom_left, hline, c.bottom_right));
        Ok(out)
    }

    pub fn draw(&self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        let out = self.render(term.columns()?)?;
        term.write(&out)?;
        Ok(())
    }
}
