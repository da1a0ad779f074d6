//! Cell rendering: one value into fixed-width lines.

use super::Align;
use crate::util::{pad, split_paragraphs};
use crate::RenderError;

/// Render `text` into lines of exactly `width` columns.
///
/// The text is split with [`split_paragraphs`] and every paragraph is padded
/// according to `align`. Callers line up cells of the same row by index, so a
/// multi-line cell renders beside its neighbours.
///
/// # Example
///
/// ```rust
/// use textui_render::tabular::{render_cell, Align};
///
/// let lines = render_cell("abcdef", 4, Align::Right).unwrap();
/// assert_eq!(lines, vec!["abcd", "  ef"]);
/// ```
pub fn render_cell(text: &str, width: usize, align: Align) -> Result<Vec<String>, RenderError> {
    Ok(split_paragraphs(text, width)?
        .iter()
        .map(|line| pad(line, width, align))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;
    use proptest::prelude::*;

    #[test]
    fn single_line_left() {
        assert_eq!(render_cell("a", 8, Align::Left).unwrap(), vec!["a       "]);
    }

    #[test]
    fn center_odd_padding_goes_right() {
        assert_eq!(render_cell("abc", 6, Align::Center).unwrap(), vec![" abc  "]);
    }

    #[test]
    fn multi_line_cell_pads_every_line() {
        let lines = render_cell("Playstation Sony 4", 8, Align::Left).unwrap();
        assert_eq!(lines, vec!["Playstat", "ion Sony", " 4      "]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(render_cell("", 3, Align::Right).unwrap(), vec!["   "]);
    }

    #[test]
    fn zero_width_fails() {
        assert!(matches!(
            render_cell("x", 0, Align::Left),
            Err(RenderError::InvalidWidth(0))
        ));
    }

    proptest! {
        #[test]
        fn every_line_has_exact_width(
            text in "[a-zA-Z0-9 \n]{0,60}",
            width in 1usize..16,
            align in prop_oneof![Just(Align::Left), Just(Align::Right), Just(Align::Center)],
        ) {
            for line in render_cell(&text, width, align).unwrap() {
                prop_assert_eq!(display_width(&line), width);
            }
        }
    }
}
