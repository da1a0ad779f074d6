//! Screen layout of the CRUD table and its bars.
//!
//! Everything here is a pure function of the configuration, the state and
//! the terminal width, so it can be tested without a terminal.

use serde::Deserialize;
use textui_render::tabular::{resolve_widths, Align};
use textui_render::widgets::HorizontalRule;
use textui_render::{fit, Record};

use super::bindings::{Action, Bindings, Navigation};
use super::state::CrudState;
use super::text::CrudText;
use crate::CrudError;

/// Columns lost to the margins around the table.
const TABLE_MARGIN: usize = 2;
/// Columns lost to the row marker and row number.
const ROW_PREFIX: usize = 4;

/// Display configuration of one record field.
///
/// ```rust
/// use textui::ColumnSpec;
/// use textui::tabular::Align;
///
/// let price = ColumnSpec::new("price", "Price").weight(0.2).align(Align::Right);
/// assert_eq!(price.weight, Some(0.2));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    #[serde(default)]
    pub label: String,
    /// Share of the table width in `(0, 1]`. Columns without one split
    /// whatever the weighted columns leave.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub align: Align,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            label: label.into(),
            weight: None,
            align: Align::Left,
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn label(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }
}

/// Validated column configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Layout {
    columns: Vec<ColumnSpec>,
    weights: Option<Vec<f64>>,
}

impl Layout {
    /// Check the weights and fill in those of unweighted columns.
    pub(crate) fn new(columns: Vec<ColumnSpec>) -> Result<Self, CrudError> {
        for column in &columns {
            if let Some(weight) = column.weight {
                if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
                    return Err(CrudError::InvalidWeight {
                        column: column.key.clone(),
                        weight,
                    });
                }
            }
        }

        let unweighted = columns.iter().filter(|c| c.weight.is_none()).count();
        let weights = if unweighted == columns.len() {
            None
        } else {
            let used: f64 = columns.iter().filter_map(|c| c.weight).sum();
            let share = (1.0 - used).max(0.0) / unweighted.max(1) as f64;
            if unweighted > 0 && share <= 0.0 {
                let column = columns
                    .iter()
                    .find(|c| c.weight.is_none())
                    .map(|c| c.key.clone())
                    .unwrap_or_default();
                return Err(CrudError::InvalidWeight {
                    column,
                    weight: share,
                });
            }
            Some(columns.iter().map(|c| c.weight.unwrap_or(share)).collect())
        };

        Ok(Layout { columns, weights })
    }

    /// Columns shown for `rows`: the configured ones, or else the fields of
    /// the first row with equal widths.
    fn columns_for(&self, rows: &[Record]) -> Vec<ColumnSpec> {
        if !self.columns.is_empty() {
            return self.columns.clone();
        }
        rows.first()
            .map(|record| {
                record
                    .keys()
                    .map(|key| ColumnSpec::new(key, key))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn widths(&self, columns: usize, count: usize) -> Result<Vec<usize>, CrudError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let inner = columns
            .saturating_sub(TABLE_MARGIN)
            .saturating_sub(ROW_PREFIX);
        Ok(resolve_widths(inner, count, self.weights.as_deref())?.widths)
    }
}

/// Everything the screen draws besides the state.
pub(crate) struct Screen<'a> {
    pub title: &'a str,
    pub layout: &'a Layout,
    pub bindings: &'a Bindings,
    pub navigation: &'a Navigation,
    pub text: &'a CrudText,
}

impl Screen<'_> {
    /// Title block, status line, table, navigation and command bar, ending
    /// with the prompt.
    pub(crate) fn render(
        &self,
        message: Option<&str>,
        state: &CrudState,
        columns: usize,
    ) -> Result<String, CrudError> {
        let heavy = HorizontalRule::new("=").render(columns);
        let light = HorizontalRule::new("-").render(columns);
        let rows = state.pager().rows();
        let specs = self.layout.columns_for(rows);
        let widths = self.layout.widths(columns, specs.len())?;

        let mut out = String::new();
        for line in [heavy.as_str(), self.title, heavy.as_str(), message.unwrap_or(" ")] {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&header_line(&specs, &widths));
        out.push_str(&light);
        out.push('\n');
        for (index, record) in rows.iter().enumerate() {
            let selected = state.pager().selected_row() == Some(index + 1);
            out.push_str(&row_line(index + 1, selected, record, &specs, &widths));
        }
        out.push_str(&light);
        out.push('\n');
        out.push_str(&navigation_line(
            self.text,
            self.navigation,
            state.current_page(),
            state.page_count(),
        ));
        out.push_str(&command_bar(self.text, self.bindings, columns));
        out.push_str("> ");
        Ok(out)
    }
}

fn cells<'a>(
    values: impl Iterator<Item = (String, &'a ColumnSpec)>,
    widths: &[usize],
) -> String {
    values
        .zip(widths)
        .map(|((value, spec), width)| {
            // One record is one screen line.
            let value = value.replace(['\r', '\n'], " ");
            fit(&value, width.saturating_sub(1), spec.align)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn header_line(specs: &[ColumnSpec], widths: &[usize]) -> String {
    let labels = specs.iter().map(|s| (s.label().to_string(), s));
    format!("   # {}\n", cells(labels, widths))
}

pub(crate) fn row_line(
    number: usize,
    selected: bool,
    record: &Record,
    specs: &[ColumnSpec],
    widths: &[usize],
) -> String {
    let marker = if selected { '>' } else { ' ' };
    let values = specs.iter().map(|s| {
        let value = record.get(&s.key).map(ToString::to_string).unwrap_or_default();
        (value, s)
    });
    format!("{}{:>3} {}\n", marker, number, cells(values, widths))
}

pub(crate) fn navigation_line(
    text: &CrudText,
    navigation: &Navigation,
    page: usize,
    count: usize,
) -> String {
    let mut line = format!("{} {} / {}", text.page, page, count.max(1));
    if count > 1 {
        line.push_str(&format!(
            " [{}: {}#] [{}: {}#] [{}: {}#]",
            text.selected_page,
            navigation.select_page,
            text.previous_page,
            navigation.previous_page,
            text.next_page,
            navigation.next_page,
        ));
    }
    line.push('\n');
    line
}

/// Buttons of the bound actions, right aligned.
pub(crate) fn command_bar(text: &CrudText, bindings: &Bindings, columns: usize) -> String {
    let order = [
        Action::View,
        Action::Insert,
        Action::Update,
        Action::Delete,
        Action::Extra,
        Action::Exit,
    ];
    let mut buttons = vec![format!("[{}: #]", text.select_row)];
    buttons.extend(
        order
            .into_iter()
            .filter_map(|action| bindings.get(action))
            .filter(|binding| binding.is_bound())
            .map(|binding| format!("<[{}] {}>", binding.key, binding.label)),
    );
    format!("{:>width$}\n", buttons.join(" "), width = columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::bindings::{Binding, Flow};

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Ann").with("age", 31),
            Record::new().with("id", 2).with("name", "Bob").with("age", 45),
        ]
    }

    #[test]
    fn weights_must_be_in_unit_interval() {
        for weight in [0.0, -0.5, 1.5, f64::NAN] {
            let err = Layout::new(vec![ColumnSpec::new("a", "A").weight(weight)]).unwrap_err();
            assert!(matches!(err, CrudError::InvalidWeight { .. }));
        }
    }

    #[test]
    fn unweighted_columns_share_the_rest() {
        let layout = Layout::new(vec![
            ColumnSpec::new("a", "A").weight(0.5),
            ColumnSpec::new("b", "B"),
            ColumnSpec::new("c", "C"),
        ])
        .unwrap();
        assert_eq!(layout.weights, Some(vec![0.5, 0.25, 0.25]));
        // 106 - 2 - 4 = 100 columns to share.
        assert_eq!(layout.widths(106, 3).unwrap(), vec![50, 25, 25]);
    }

    #[test]
    fn nothing_left_for_unweighted_columns() {
        let err = Layout::new(vec![
            ColumnSpec::new("a", "A").weight(1.0),
            ColumnSpec::new("b", "B"),
        ])
        .unwrap_err();
        match err {
            CrudError::InvalidWeight { column, .. } => assert_eq!(column, "b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn record_keys_without_columns() {
        let layout = Layout::default();
        let specs = layout.columns_for(&people());
        let keys: Vec<&str> = specs.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "name", "age"]);
        assert_eq!(layout.widths(36, 3).unwrap(), vec![10, 10, 10]);
        assert!(layout.columns_for(&[]).is_empty());
    }

    #[test]
    fn header_and_rows() {
        let specs = vec![
            ColumnSpec::new("name", "Name"),
            ColumnSpec::new("age", "Age").align(Align::Right),
        ];
        let widths = [8, 6];
        assert_eq!(header_line(&specs, &widths), "   # Name      Age\n");
        let record = &people()[0];
        assert_eq!(
            row_line(1, false, record, &specs, &widths),
            "   1 Ann        31\n"
        );
        assert_eq!(
            row_line(12, true, record, &specs, &widths),
            "> 12 Ann        31\n"
        );
    }

    #[test]
    fn long_values_are_cut() {
        let specs = vec![ColumnSpec::new("name", "Name")];
        let record = Record::new().with("name", "Bartholomew");
        assert_eq!(row_line(1, false, &record, &specs, &[5]), "   1 Bart\n");
    }

    #[test]
    fn line_breaks_stay_on_one_row() {
        let specs = vec![ColumnSpec::new("note", "Note")];
        let record = Record::new().with("note", "a\nb");
        assert_eq!(row_line(1, false, &record, &specs, &[8]), "   1 a b    \n");
        let record = Record::new().with("note", "one\r\ntwo");
        let line = row_line(2, false, &record, &specs, &[8]);
        assert_eq!(line, "   2 one  tw\n");
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn missing_fields_are_blank() {
        let specs = vec![ColumnSpec::new("email", "E-mail"), ColumnSpec::new("name", "Name")];
        let record = Record::new().with("name", "Ann");
        assert_eq!(
            row_line(1, false, &record, &specs, &[7, 5]),
            "   1        Ann \n"
        );
    }

    #[test]
    fn navigation_help_only_with_several_pages() {
        let text = CrudText::default();
        let nav = Navigation::default();
        assert_eq!(navigation_line(&text, &nav, 1, 1), "Page 1 / 1\n");
        assert_eq!(navigation_line(&text, &nav, 1, 0), "Page 1 / 1\n");
        assert_eq!(
            navigation_line(&text, &nav, 2, 3),
            "Page 2 / 3 [Selected page: p#] [Prev. page: -#] [Next page: +#]\n"
        );
    }

    #[test]
    fn command_bar_lists_bound_actions() {
        let bindings = Bindings {
            insert: Binding::new('N', "New").on(|_, _| Ok(Flow::Continue)),
            extra: Some(Binding::new('X', "Export").on(|_, _| Ok(Flow::Continue))),
            ..Default::default()
        };
        let bar = command_bar(&CrudText::default(), &bindings, 70);
        let expected = "[Select/Deselect row: #] <[N] New> <[X] Export> <[Q] Quit>";
        assert_eq!(bar.trim_start(), format!("{}\n", expected));
        assert_eq!(bar.len(), 71);
    }

    #[test]
    fn column_specs_from_yaml() {
        let specs: Vec<ColumnSpec> = serde_yaml::from_str(
            r#"
- key: name
  label: Name
  weight: 0.6
- key: price
  align: right
"#,
        )
        .unwrap();
        assert_eq!(specs[0].weight, Some(0.6));
        assert_eq!(specs[1].align, Align::Right);
        assert_eq!(specs[1].label(), "price");
    }
}
