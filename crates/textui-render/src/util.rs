//! Text helpers: paragraph splitting, padding and clipping.
//!
//! Widths are display widths (`unicode-width`), so wide characters count as
//! two columns. For ASCII text this is the character count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tabular::Align;
use crate::RenderError;

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Break `text` into lines no wider than `width`.
///
/// The text is split on its own line breaks first (empty lines are kept as
/// empty strings), then every line wider than `width` is hard-split into
/// consecutive chunks of `width` columns. There is no word-boundary logic.
///
/// # Example
///
/// ```rust
/// use textui_render::split_paragraphs;
///
/// let lines = split_paragraphs("abcdefg\n\nxy", 3).unwrap();
/// assert_eq!(lines, vec!["abc", "def", "g", "", "xy"]);
/// ```
pub fn split_paragraphs(text: &str, width: usize) -> Result<Vec<String>, RenderError> {
    if width < 1 {
        return Err(RenderError::InvalidWidth(width));
    }

    let mut paragraphs = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if display_width(line) <= width {
            paragraphs.push(line.to_string());
            continue;
        }
        hard_split(line, width, &mut paragraphs);
    }
    Ok(paragraphs)
}

fn hard_split(line: &str, width: usize, out: &mut Vec<String>) {
    let mut chunk = String::new();
    let mut chunk_width = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if chunk_width + w > width && !chunk.is_empty() {
            out.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        out.push(chunk);
    }
}

/// Pad `s` with spaces to exactly `width` columns.
///
/// Left alignment pads on the right, right alignment on the left, center
/// splits the padding with the odd column going to the right. Text already
/// at or over `width` is returned unchanged.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let padding = width - current;
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(padding)),
        Align::Right => format!("{}{}", " ".repeat(padding), s),
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
        }
    }
}

/// Cut `s` to at most `width` columns, without any marker.
pub fn clip(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Clip or pad `s` so it occupies exactly `width` columns.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    if display_width(s) >= width {
        pad(&clip(s, width), width, Align::Left)
    } else {
        pad(s, width, align)
    }
}
