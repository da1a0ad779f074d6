//! User-visible strings of the form review.

use std::collections::HashSet;

use serde::Deserialize;
use textui_render::DEFAULT_DATE_FORMAT;

use crate::FormError;

/// One review button: the key that triggers it and its label.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ButtonText {
    pub key: char,
    pub label: String,
}

impl ButtonText {
    pub fn new(key: char, label: impl Into<String>) -> Self {
        ButtonText {
            key,
            label: label.into(),
        }
    }

    fn matches(&self, input: &str) -> bool {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().eq(self.key.to_lowercase()),
            _ => false,
        }
    }
}

/// Buttons, messages and date pattern of the review step.
///
/// ```rust
/// use textui::FormText;
///
/// let text = FormText::from_yaml(r#"
/// save: { key: G, label: Gravar }
/// date_format: "%d/%m/%Y"
/// "#).unwrap();
/// assert_eq!(text.save.key, 'G');
/// assert_eq!(text.cancel.label, "Cancel");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormText {
    pub save: ButtonText,
    pub restart: ButtonText,
    pub cancel: ButtonText,
    /// Printed when the review answer matches no button.
    pub invalid_action: String,
    /// Chrono pattern for date answers in the review table.
    pub date_format: String,
}

impl Default for FormText {
    fn default() -> Self {
        FormText {
            save: ButtonText::new('S', "Save"),
            restart: ButtonText::new('R', "Restart"),
            cancel: ButtonText::new('C', "Cancel"),
            invalid_action: "⚠ Invalid option.".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

/// What the user chose on the review screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReviewAction {
    Save,
    Restart,
    Cancel,
}

impl FormText {
    /// Parse form text from YAML, falling back to defaults for missing keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, FormError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub(crate) fn validate(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for button in self.buttons() {
            if !seen.insert(button.key.to_lowercase().collect::<String>()) {
                return Err(FormError::DuplicateKey(button.key));
            }
        }
        Ok(())
    }

    fn buttons(&self) -> [&ButtonText; 3] {
        [&self.save, &self.restart, &self.cancel]
    }

    pub(crate) fn button_bar(&self) -> String {
        self.buttons()
            .iter()
            .map(|b| format!("<[{}] {}>", b.key, b.label))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn action_for(&self, input: &str) -> Option<ReviewAction> {
        if self.save.matches(input) {
            Some(ReviewAction::Save)
        } else if self.restart.matches(input) {
            Some(ReviewAction::Restart)
        } else if self.cancel.matches(input) {
            Some(ReviewAction::Cancel)
        } else {
            None
        }
    }
}
