//! Indeterminate loader: a label and a cycling dot indicator.

use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};

use super::target::FrameBuffer;
use crate::tabular::Align;
use crate::terminal::Terminal;
use crate::util::{display_width, fit};
use crate::RenderError;

/// Indicator frames. The last one is indicatif's finished frame and is never
/// shown, since [`Loader::end`] replaces the indicator with a status.
const INDICATORS: [&str; 21] = [
    "    ", "   .", "  . ", " .  ", ".   ", ".  .", ". . ", "..  ", ".. .", "... ", "....",
    "... ", ".. .", "..  ", ". . ", ".  .", ".   ", " .  ", "  . ", "   .", "....",
];

const CYCLE: usize = INDICATORS.len() - 1;

const RUNNING: &str = "{prefix}[{spinner}]";
const DONE: &str = "{prefix}[{msg}]";

/// A single-line activity indicator.
///
/// Every update clears the current line, redraws `label [....]` and returns
/// the cursor to the start of the line, so other output is not interleaved.
///
/// ```rust
/// use textui_render::{meter::Loader, MockTerminal};
///
/// let mut term = MockTerminal::new(20, 5);
/// let mut loader = Loader::new("Working");
/// loader.update(&mut term).unwrap();
/// loader.finish(&mut term).unwrap();
/// assert!(term.output().ends_with("Working        [Ok]"));
/// ```
pub struct Loader {
    label: String,
    index: usize,
    bar: ProgressBar,
    frames: FrameBuffer,
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("label", &self.label)
            .field("indicator", &self.indicator())
            .finish()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new("")
    }
}

impl Loader {
    pub fn new(label: impl Into<String>) -> Self {
        let frames = FrameBuffer::default();
        let bar = ProgressBar::with_draw_target(None, frames.draw_target());
        Self {
            label: label.into(),
            index: 0,
            bar,
            frames,
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The indicator shown by the last update.
    pub fn indicator(&self) -> &'static str {
        INDICATORS[self.index]
    }

    /// Restart with a new label and draw the first indicator.
    pub fn start(&mut self, term: &mut dyn Terminal, label: impl Into<String>) -> Result<(), RenderError> {
        *self = Self::new(label);
        // Setting the prefix draws the current frame.
        self.prepare(term, RUNNING, INDICATORS[0])?;
        self.frames.flush_to(term, true)
    }

    /// Advance the indicator and redraw.
    ///
    /// After [`end`](Self::end) the cycle starts over.
    pub fn update(&mut self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        if self.bar.is_finished() {
            let label = std::mem::take(&mut self.label);
            *self = Self::new(label);
        }
        self.index = (self.index + 1) % CYCLE;
        self.prepare(term, RUNNING, INDICATORS[self.index])?;
        // The spinner counts ticks since the bar was created, as `index` does.
        self.bar.tick();
        self.frames.flush_to(term, true)
    }

    /// Replace the indicator with a final status such as `Ok` or `Failed`.
    ///
    /// The cursor stays at the end of the line.
    pub fn end(&mut self, term: &mut dyn Terminal, status: &str) -> Result<(), RenderError> {
        self.prepare(term, DONE, status)?;
        self.bar.finish_with_message(status.to_string());
        self.frames.flush_to(term, false)
    }

    /// End with the `Ok` status.
    pub fn finish(&mut self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        self.end(term, "Ok")
    }

    /// Size the frame for `indicator` and fit the label in front of it.
    fn prepare(&mut self, term: &mut dyn Terminal, template: &str, indicator: &str) -> Result<(), RenderError> {
        let columns = term.columns()?;
        let indicator_width = display_width(indicator);
        let label_width = columns.saturating_sub(indicator_width + 3);
        let style = ProgressStyle::default_spinner()
            .tick_strings(&INDICATORS)
            .template(template)?;

        self.frames.set_width(label_width + indicator_width + 2);
        self.bar.set_style(style);
        self.bar.set_prefix(fit(&self.label, label_width, Align::Left));
        Ok(())
    }
}
