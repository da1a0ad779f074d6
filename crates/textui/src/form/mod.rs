//! Form orchestration: ask a sequence of entries, then review.
//!
//! A [`Form`] owns named [`Entry`] widgets and asks them in the order they
//! were added. With review enabled (the default) the answers are shown as a
//! two-column table followed by Save, Restart and Cancel buttons:
//!
//! - Save returns [`FormOutcome::Saved`] and keeps the answers.
//! - Restart asks every entry again.
//! - Cancel clears the answers and returns [`FormOutcome::Cancelled`].
//!
//! Any other key prints a notice and asks again.
//!
//! ```rust
//! use textui::{Form, FormOutcome, MockTerminal, Value};
//! use textui::input::{NumberEntry, NumberKind, TextEntry};
//!
//! let mut form = Form::new("New contact")
//!     .entry("name", TextEntry::new("Name: "))
//!     .entry("age", NumberEntry::new("Age: ").kind(NumberKind::Integer));
//!
//! let mut term = MockTerminal::new(80, 24).with_responses(["Ann", "31", "s"]);
//! assert_eq!(form.ask(&mut term).unwrap(), FormOutcome::Saved);
//! assert_eq!(form.answers().get("age"), Some(&Value::Integer(31)));
//! ```

mod review;
mod text;

pub use text::{ButtonText, FormText};

use textui_input::{prompt_line, Entry};
use textui_render::widgets::HorizontalRule;
use textui_render::{AnsiCommand, Record, Terminal};

use crate::FormError;
use review::{review_label, review_table, stringify};
use text::ReviewAction;

/// How a form ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Saved,
    Cancelled,
}

/// An ordered set of entries asked as one screen.
pub struct Form {
    title: String,
    entries: Vec<(String, Box<dyn Entry>)>,
    answers: Record,
    always_clear: bool,
    review: bool,
    text: FormText,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("title", &self.title)
            .field("entries", &self.ids().collect::<Vec<_>>())
            .field("answers", &self.answers)
            .field("always_clear", &self.always_clear)
            .field("review", &self.review)
            .finish()
    }
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Form {
            title: title.into(),
            entries: Vec::new(),
            answers: Record::new(),
            always_clear: true,
            review: true,
            text: FormText::default(),
        }
    }

    /// Add an entry. An entry with the same id is replaced in place.
    pub fn add_entry(&mut self, id: impl Into<String>, entry: impl Entry + 'static) -> &mut Self {
        let id = id.into();
        let entry: Box<dyn Entry> = Box::new(entry);
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((id, entry)),
        }
        self
    }

    /// Builder form of [`add_entry`](Self::add_entry).
    pub fn entry(mut self, id: impl Into<String>, entry: impl Entry + 'static) -> Self {
        self.add_entry(id, entry);
        self
    }

    /// Clear the screen before asking and before reviewing. On by default.
    pub fn always_clear(mut self, always_clear: bool) -> Self {
        self.always_clear = always_clear;
        self
    }

    /// Show the review step. On by default.
    pub fn review(mut self, review: bool) -> Self {
        self.review = review;
        self
    }

    pub fn text(mut self, text: FormText) -> Self {
        self.text = text;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entry ids in asking order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Answers of the last [`ask`](Self::ask), keyed by entry id in entry
    /// order. Empty after a cancel.
    pub fn answers(&self) -> &Record {
        &self.answers
    }

    pub fn into_answers(self) -> Record {
        self.answers
    }

    /// Ask every entry, then review if enabled.
    ///
    /// # Errors
    ///
    /// [`FormError::NoEntriesDefined`] without entries,
    /// [`FormError::DuplicateKey`] when review buttons share a key, and any
    /// error an entry returns, such as a cancelled prompt.
    pub fn ask(&mut self, term: &mut dyn Terminal) -> Result<FormOutcome, FormError> {
        if self.entries.is_empty() {
            return Err(FormError::NoEntriesDefined);
        }
        if self.review {
            self.text.validate()?;
        }

        loop {
            tracing::debug!(form = %self.title, "asking entries");
            self.ask_entries(term)?;
            if !self.review {
                return Ok(FormOutcome::Saved);
            }

            let action = self.review_answers(term)?;
            tracing::debug!(form = %self.title, ?action, "review answered");
            match action {
                ReviewAction::Save => return Ok(FormOutcome::Saved),
                ReviewAction::Cancel => {
                    self.answers.clear();
                    return Ok(FormOutcome::Cancelled);
                }
                ReviewAction::Restart => continue,
            }
        }
    }

    fn clear(&self, term: &mut dyn Terminal) -> Result<(), FormError> {
        if self.always_clear {
            term.send(AnsiCommand::ClearScreen)?;
        }
        Ok(())
    }

    fn ask_entries(&mut self, term: &mut dyn Terminal) -> Result<(), FormError> {
        self.clear(term)?;
        HorizontalRule::new("=").draw(term)?;
        term.write_line(&self.title)?;
        HorizontalRule::new("-").draw(term)?;

        self.answers.clear();
        for (id, entry) in &mut self.entries {
            let answer = entry.read(term)?;
            self.answers.insert(id.clone(), answer);
        }

        HorizontalRule::new("=").draw(term)?;
        Ok(())
    }

    fn review_answers(&self, term: &mut dyn Terminal) -> Result<ReviewAction, FormError> {
        self.clear(term)?;

        let mut rows = Vec::new();
        for (id, entry) in self.entries.iter().filter(|(_, e)| e.reviewable()) {
            let Some(answer) = self.answers.get(id) else {
                continue;
            };
            let answer = stringify(id, answer, &self.text.date_format)?;
            rows.push([review_label(entry.label()).to_string(), answer]);
        }
        if let Some(table) = review_table(rows) {
            table.draw(term)?;
        }

        loop {
            term.write_line(&self.text.button_bar())?;
            let input = prompt_line(term, "> ")?;
            match self.text.action_for(&input) {
                Some(action) => return Ok(action),
                None => {
                    tracing::warn!(input = %input, "invalid review action");
                    term.write_line(&self.text.invalid_action)?;
                }
            }
        }
    }
}
