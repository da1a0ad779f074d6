//! Table composer: header, body and footer blocks with borders.
//!
//! A [`Table`] owns a rectangular grid of cell strings plus an optional
//! header and footer row. Rendering resolves one width per column from the
//! available width, splits every cell into fixed-width paragraphs and lays the
//! paragraphs of a row side by side, padding short cells with blank lines up
//! to the tallest cell.
//!
//! # Example
//!
//! ```rust
//! use textui_render::tabular::{Align, Table};
//!
//! let table = Table::new(vec![vec!["John", "43"], vec!["Mary", "38"]])
//!     .header(["Name", "Age"])
//!     .aligns([Align::Left, Align::Right]);
//!
//! let out = table.render(30).unwrap();
//! assert_eq!(
//!     out,
//!     "+=============+=============+\n\
//!      | Name        |         Age |\n\
//!      +=============+=============+\n\
//!      | John        |          43 |\n\
//!      +-------------+-------------+\n\
//!      | Mary        |          38 |\n\
//!      +=============+=============+\n"
//! );
//! ```

use super::cell::render_cell;
use super::resolve::{normalize_weights, resolve_widths, ResolvedWidths};
use super::types::{Align, Borders};
use crate::terminal::Terminal;
use crate::RenderError;

/// Columns lost to the border and padding around each cell's content.
pub const CELL_OVERHEAD: usize = 4;

/// A bordered table of text cells.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
    header: Option<Vec<String>>,
    footer: Option<Vec<String>>,
    widths: Option<Vec<f64>>,
    aligns: Vec<Align>,
    borders: Borders,
}

impl Table {
    /// Create a table from rows of displayable cells.
    pub fn new<R, C, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: ToString,
    {
        Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
                .collect(),
            ..Default::default()
        }
    }

    /// Set the header row, framed by the special border above and below.
    pub fn header<V: ToString>(mut self, header: impl IntoIterator<Item = V>) -> Self {
        self.header = Some(header.into_iter().map(|c| c.to_string()).collect());
        self
    }

    /// Set the footer row, drawn after the body and closed by the special border.
    pub fn footer<V: ToString>(mut self, footer: impl IntoIterator<Item = V>) -> Self {
        self.footer = Some(footer.into_iter().map(|c| c.to_string()).collect());
        self
    }

    /// Set relative column widths.
    ///
    /// Values are parts of the whole: `[40, 20, 10]` and `[0.3, 0.6, 0.1]`
    /// both work. Without widths the columns share the width equally.
    pub fn col_widths(mut self, parts: impl IntoIterator<Item = f64>) -> Self {
        self.widths = Some(parts.into_iter().collect());
        self
    }

    /// Set the alignment of each column, in order. Missing columns align left.
    pub fn aligns(mut self, aligns: impl IntoIterator<Item = Align>) -> Self {
        self.aligns = aligns.into_iter().collect();
        self
    }

    /// Set the alignment of a single column.
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if self.aligns.len() <= column {
            self.aligns.resize(column + 1, Align::Left);
        }
        self.aligns[column] = align;
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Number of columns: the width of the first row, else of the header.
    pub fn column_count(&self) -> Result<usize, RenderError> {
        self.rows
            .first()
            .or(self.header.as_ref())
            .map(Vec::len)
            .filter(|&n| n > 0)
            .ok_or(RenderError::NoColumns)
    }

    /// Resolve the absolute width of every column for `total_width`.
    pub fn resolve(&self, total_width: usize) -> Result<ResolvedWidths, RenderError> {
        let columns = self.column_count()?;
        match &self.widths {
            None => resolve_widths(total_width, columns, None),
            Some(parts) => {
                if parts.len() != columns {
                    return Err(RenderError::mismatch("column widths", columns, parts.len()));
                }
                let weights = normalize_weights(parts)?;
                resolve_widths(total_width, columns, Some(&weights))
            }
        }
    }

    /// Render the whole table for `total_width` columns.
    ///
    /// Every output line ends with a line break.
    pub fn render(&self, total_width: usize) -> Result<String, RenderError> {
        let columns = self.column_count()?;
        self.check_columns(columns)?;

        let widths = self.resolve(total_width)?;
        let content = content_widths(&widths)?;

        let special = self.separator(&widths, self.borders.special_horizontal);
        let simple = self.separator(&widths, self.borders.simple_horizontal);

        let mut out = String::new();
        if let Some(header) = &self.header {
            out.push_str(&special);
            self.push_row(&mut out, header, &content)?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            out.push_str(if index == 0 { &special } else { &simple });
            self.push_row(&mut out, row, &content)?;
        }
        out.push_str(&special);
        if let Some(footer) = &self.footer {
            self.push_row(&mut out, footer, &content)?;
            out.push_str(&special);
        }
        Ok(out)
    }

    /// Render at the terminal's width and write the result.
    pub fn draw(&self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        let out = self.render(term.columns()?)?;
        term.write(&out)?;
        Ok(())
    }

    fn check_columns(&self, columns: usize) -> Result<(), RenderError> {
        if let Some(header) = &self.header {
            if header.len() != columns {
                return Err(RenderError::mismatch("header", columns, header.len()));
            }
        }
        if let Some(footer) = &self.footer {
            if footer.len() != columns {
                return Err(RenderError::mismatch("footer", columns, footer.len()));
            }
        }
        if let Some(row) = self.rows.iter().find(|row| row.len() != columns) {
            return Err(RenderError::mismatch("row", columns, row.len()));
        }
        Ok(())
    }

    fn separator(&self, widths: &ResolvedWidths, fill: char) -> String {
        let mut line = String::new();
        line.push(self.borders.intersection);
        for width in widths.iter() {
            line.extend(std::iter::repeat(fill).take(width.saturating_sub(2)));
            line.push(self.borders.intersection);
        }
        line.push('\n');
        line
    }

    fn push_row(&self, out: &mut String, row: &[String], content: &[usize]) -> Result<(), RenderError> {
        let cells = row
            .iter()
            .zip(content)
            .enumerate()
            .map(|(column, (text, &width))| render_cell(text, width, self.align_of(column)))
            .collect::<Result<Vec<_>, _>>()?;
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);

        let v = self.borders.vertical;
        for paragraph in 0..height {
            for (lines, &width) in cells.iter().zip(content) {
                let blank;
                let text = match lines.get(paragraph) {
                    Some(line) => line.as_str(),
                    None => {
                        blank = " ".repeat(width);
                        blank.as_str()
                    }
                };
                out.push(v);
                out.push(' ');
                out.push_str(text);
                out.push(' ');
            }
            out.push(v);
            out.push('\n');
        }
        Ok(())
    }

    fn align_of(&self, column: usize) -> Align {
        self.aligns.get(column).copied().unwrap_or_default()
    }
}

fn content_widths(widths: &ResolvedWidths) -> Result<Vec<usize>, RenderError> {
    widths
        .iter()
        .enumerate()
        .map(|(column, width)| match width.checked_sub(CELL_OVERHEAD) {
            Some(content) if content >= 1 => Ok(content),
            _ => Err(RenderError::InvalidColumnWidth { column, width }),
        })
        .collect()
}
