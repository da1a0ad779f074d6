//! Core types for table layout: alignment and border characters.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of text within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, odd column on the right).
    Center,
}

/// Characters used to draw table borders.
///
/// The special horizontal character frames the table and the header/footer;
/// the simple one separates body rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    pub intersection: char,
    pub simple_horizontal: char,
    pub special_horizontal: char,
    pub vertical: char,
}

impl Default for Borders {
    fn default() -> Self {
        Borders {
            intersection: '+',
            simple_horizontal: '-',
            special_horizontal: '=',
            vertical: '|',
        }
    }
}

impl Borders {
    /// Light Unicode box-drawing characters.
    pub fn light() -> Self {
        Borders {
            intersection: '┼',
            simple_horizontal: '─',
            special_horizontal: '═',
            vertical: '│',
        }
    }

    pub fn intersection(mut self, c: char) -> Self {
        self.intersection = c;
        self
    }

    pub fn simple_horizontal(mut self, c: char) -> Self {
        self.simple_horizontal = c;
        self
    }

    pub fn special_horizontal(mut self, c: char) -> Self {
        self.special_horizontal = c;
        self
    }

    pub fn vertical(mut self, c: char) -> Self {
        self.vertical = c;
        self
    }
}
