//! User-visible strings of the CRUD screen.

use serde::Deserialize;

use crate::CrudError;

/// Navigation labels and status messages shown by [`Crud`](super::Crud).
///
/// Every field has an English default, so a YAML document only needs the
/// strings it translates:
///
/// ```rust
/// use textui::CrudText;
///
/// let text = CrudText::from_yaml(r#"
/// page: Página
/// unknown_command: "⚠ Comando desconhecido."
/// "#).unwrap();
/// assert_eq!(text.page, "Página");
/// assert_eq!(text.next_page, "Next page");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrudText {
    pub page: String,
    pub selected_page: String,
    pub previous_page: String,
    pub next_page: String,
    pub select_row: String,
    pub unknown_command: String,
    pub page_not_found: String,
    pub no_record_selected: String,
    pub row_not_found: String,
    /// Shown when the terminal is too narrow; `{min}` is replaced by the minimum.
    pub min_columns: String,
}

impl Default for CrudText {
    fn default() -> Self {
        CrudText {
            page: "Page".into(),
            selected_page: "Selected page".into(),
            previous_page: "Prev. page".into(),
            next_page: "Next page".into(),
            select_row: "Select/Deselect row".into(),
            unknown_command: "⚠️ Unknown command.".into(),
            page_not_found: "⚠ ️This page does not exist.".into(),
            no_record_selected: "⚠ No record selected!".into(),
            row_not_found: "⚠ This row does not exist.".into(),
            min_columns: "The terminal does not have the minimum of {min} columns, so the \
                          screen may not display correctly. Increase the window width to fix this."
                .into(),
        }
    }
}

impl CrudText {
    /// Parse screen text from YAML, falling back to defaults for missing keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, CrudError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub(crate) fn min_columns_message(&self, min: usize) -> String {
        self.min_columns.replace("{min}", &min.to_string())
    }
}
