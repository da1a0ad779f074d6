//! The review table shown after all entries are answered.

use textui_render::tabular::Table;
use textui_render::Value;

use crate::FormError;

/// Relative widths of the label and answer columns.
const REVIEW_WIDTHS: [f64; 2] = [1.0, 2.0];

/// Render an answer for the review table.
///
/// Text passes through, numbers use their usual notation, dates follow
/// `date_format` and lists are joined with `, `. Other answers cannot be
/// reviewed.
pub(crate) fn stringify(id: &str, value: &Value, date_format: &str) -> Result<String, FormError> {
    match value {
        Value::Text(_) | Value::Integer(_) | Value::Float(_) | Value::List(_) => {
            Ok(value.to_string())
        }
        Value::Date(_) => value
            .display_with(date_format)
            .ok_or_else(|| FormError::InvalidDateFormat(date_format.to_string())),
        Value::Bool(_) | Value::Null => Err(FormError::InvalidAnswerType {
            id: id.to_string(),
            type_name: value.type_name(),
        }),
    }
}

/// Entry labels usually end with `": "`; the table does not need it.
pub(crate) fn review_label(label: &str) -> &str {
    label.trim().trim_end_matches(':').trim_end()
}

/// Two-column table of `(label, answer)` rows, or `None` without rows.
pub(crate) fn review_table(rows: Vec<[String; 2]>) -> Option<Table> {
    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows).col_widths(REVIEW_WIDTHS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stringify_rules() {
        assert_eq!(stringify("a", &Value::from("x"), "%Y").unwrap(), "x");
        assert_eq!(stringify("a", &Value::from(42), "%Y").unwrap(), "42");
        assert_eq!(stringify("a", &Value::from(2.5), "%Y").unwrap(), "2.5");
        let list = Value::from(vec!["red".to_string(), "blue".to_string()]);
        assert_eq!(stringify("a", &list, "%Y").unwrap(), "red, blue");
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(
            stringify("a", &Value::from(date), "%d/%m/%Y").unwrap(),
            "01/12/2023"
        );
    }

    #[test]
    fn unreviewable_types() {
        let err = stringify("agree", &Value::from(true), "%Y").unwrap_err();
        match err {
            FormError::InvalidAnswerType { id, type_name } => {
                assert_eq!(id, "agree");
                assert_eq!(type_name, "bool");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(stringify("x", &Value::Null, "%Y").is_err());
    }

    #[test]
    fn bad_date_format() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert!(matches!(
            stringify("d", &Value::from(date), "%Q"),
            Err(FormError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn labels_lose_the_colon() {
        assert_eq!(review_label("Name: "), "Name");
        assert_eq!(review_label("  Birth date:"), "Birth date");
        assert_eq!(review_label("Why?"), "Why?");
    }

    #[test]
    fn table_widths() {
        assert!(review_table(Vec::new()).is_none());
        let table = review_table(vec![["Name".into(), "Ann".into()]]).unwrap();
        assert_eq!(table.resolve(90).unwrap().widths, vec![30, 60]);
    }
}
