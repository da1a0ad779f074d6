//! Single and multiple choice selectors.

use textui_render::{AnsiCommand, Terminal, Value};

use crate::entry::{prompt_line, Entry};
use crate::InputError;

/// Keyed options shared by both selectors.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Options {
    items: Vec<(String, String)>,
    key_width: usize,
}

impl Options {
    fn new<K, V>(options: impl IntoIterator<Item = (K, V)>) -> Result<Self, InputError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let items: Vec<(String, String)> = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if items.is_empty() {
            return Err(InputError::EmptyOptions);
        }
        let key_width = items.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        Ok(Self { items, key_width })
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    fn key_of(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(_, l)| l == label)
            .map(|(key, _)| key.as_str())
    }

    /// `[ key ]\tlabel`, keys right-aligned to the widest one.
    fn line(&self, key: &str, label: &str) -> String {
        format!("[ {:>width$} ]\t{}", key, label, width = self.key_width)
    }
}

/// Lists keyed options and returns the one picked.
///
/// Unknown keys re-prompt, printing the invalid-selection message when one
/// is set. The answer is the option's label, or its key with
/// [`return_key`](Self::return_key).
///
/// ```rust
/// use textui_input::{Entry, SingleSelector};
/// use textui_render::{MockTerminal, Value};
///
/// let mut term = MockTerminal::new(80, 24).with_responses(["b"]);
/// let mut entry = SingleSelector::new("Pick one:", [("a", "Apple"), ("b", "Banana")]).unwrap();
/// assert_eq!(entry.read(&mut term).unwrap(), Value::from("Banana"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleSelector {
    label: String,
    options: Options,
    prompt: String,
    invalid_message: Option<String>,
    return_key: bool,
}

impl SingleSelector {
    pub fn new<K, V>(
        label: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, InputError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            label: label.into(),
            options: Options::new(options)?,
            prompt: "> ".to_string(),
            invalid_message: None,
            return_key: false,
        })
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    /// Answer with the option key instead of its label.
    pub fn return_key(mut self, yes: bool) -> Self {
        self.return_key = yes;
        self
    }
}

impl Entry for SingleSelector {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        term.write_line(&self.label)?;
        for (key, label) in &self.options.items {
            term.write_line(&self.options.line(key, label))?;
        }

        loop {
            let answer = prompt_line(term, &self.prompt)?;
            if let Some(label) = self.options.get(&answer) {
                let picked = if self.return_key { answer.as_str() } else { label };
                return Ok(Value::from(picked));
            }
            if let Some(message) = &self.invalid_message {
                term.write_line(message)?;
            }
        }
    }
}

/// Toggles any number of keyed options until a blank line is entered.
///
/// Each cycle redraws the list with `[X]` marks (clearing the screen first
/// unless disabled). The answer is a [`Value::List`] of labels, or keys with
/// [`return_key`](Self::return_key), in option order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSelector {
    label: String,
    options: Options,
    prompt: String,
    invalid_message: Option<String>,
    return_key: bool,
    clear_screen: bool,
    selection: Vec<String>,
}

impl MultiSelector {
    pub fn new<K, V>(
        label: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, InputError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            label: label.into(),
            options: Options::new(options)?,
            prompt: "> ".to_string(),
            invalid_message: None,
            return_key: false,
            clear_screen: true,
            selection: Vec::new(),
        })
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    pub fn return_key(mut self, yes: bool) -> Self {
        self.return_key = yes;
        self
    }

    pub fn clear_screen(mut self, yes: bool) -> Self {
        self.clear_screen = yes;
        self
    }

    /// Preselect options by key. Unknown keys are ignored.
    pub fn default_keys<K: Into<String>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.selection = keys
            .into_iter()
            .map(Into::into)
            .filter(|k| self.options.get(k).is_some())
            .collect();
        self
    }

    /// Preselect options by label. Unknown labels are ignored.
    pub fn default_labels<'a>(mut self, labels: impl IntoIterator<Item = &'a str>) -> Self {
        self.selection = labels
            .into_iter()
            .filter_map(|label| self.options.key_of(label).map(str::to_string))
            .collect();
        self
    }

    fn is_selected(&self, key: &str) -> bool {
        self.selection.iter().any(|k| k == key)
    }

    fn toggle(&mut self, key: &str) {
        match self.selection.iter().position(|k| k == key) {
            Some(pos) => {
                self.selection.remove(pos);
            }
            None => self.selection.push(key.to_string()),
        }
    }

    fn answer(&self) -> Value {
        Value::List(
            self.options
                .items
                .iter()
                .filter(|(key, _)| self.is_selected(key))
                .map(|(key, label)| if self.return_key { key.clone() } else { label.clone() })
                .collect(),
        )
    }
}

impl Entry for MultiSelector {
    fn label(&self) -> &str {
        &self.label
    }

    fn read(&mut self, term: &mut dyn Terminal) -> Result<Value, InputError> {
        let mut last_invalid = false;
        loop {
            if self.clear_screen {
                term.send(AnsiCommand::ClearScreen)?;
            }
            term.write_line(&self.label)?;
            for (key, label) in &self.options.items {
                let mark = if self.is_selected(key) { 'X' } else { ' ' };
                term.write_line(&format!("[{}] {}", mark, self.options.line(key, label)))?;
            }
            if last_invalid {
                if let Some(message) = &self.invalid_message {
                    term.write_line(message)?;
                }
                last_invalid = false;
            }

            let answer = prompt_line(term, &self.prompt)?;
            if answer.is_empty() {
                return Ok(self.answer());
            }
            if self.options.get(&answer).is_some() {
                self.toggle(&answer);
            } else {
                last_invalid = true;
            }
        }
    }
}
