//! Draw target that hands indicatif frames to a [`Terminal`].
//!
//! indicatif draws through a `Send + Sync` [`TermLike`], while our terminals
//! are borrowed per call. [`FrameBuffer`] keeps the last frame indicatif drew;
//! the meters take it after each operation and write it themselves.

use std::io;
use std::sync::{Arc, Mutex};

use indicatif::{ProgressDrawTarget, TermLike};

use crate::terminal::{AnsiCommand, Terminal};
use crate::RenderError;

#[derive(Debug, Default)]
struct Frame {
    width: u16,
    text: String,
}

/// Shared buffer for the most recent frame.
#[derive(Clone, Debug, Default)]
pub(crate) struct FrameBuffer {
    frame: Arc<Mutex<Frame>>,
}

impl FrameBuffer {
    pub(crate) fn draw_target(&self) -> ProgressDrawTarget {
        ProgressDrawTarget::term_like(Box::new(self.clone()))
    }

    /// Width reported to indicatif for the next frame.
    ///
    /// The meters report the exact width of the line they expect, so
    /// indicatif adds no trailing filler.
    pub(crate) fn set_width(&self, width: usize) {
        self.with_frame(|frame| frame.width = u16::try_from(width).unwrap_or(u16::MAX));
    }

    /// Take the last frame drawn, if any.
    pub(crate) fn take(&self) -> Option<String> {
        let text = self.with_frame(|frame| std::mem::take(&mut frame.text));
        let text: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        (!text.is_empty()).then_some(text)
    }

    /// Write the last frame over the current line.
    ///
    /// With `rewind`, the cursor goes back to the start of the line
    /// afterwards so the next frame replaces this one.
    pub(crate) fn flush_to(&self, term: &mut dyn Terminal, rewind: bool) -> Result<(), RenderError> {
        let Some(line) = self.take() else {
            return Ok(());
        };
        term.send(AnsiCommand::ClearLine)?;
        term.send(AnsiCommand::GotoLineStart)?;
        term.write(&line)?;
        if rewind {
            term.send(AnsiCommand::GotoLineStart)?;
        }
        Ok(())
    }

    fn with_frame<T>(&self, f: impl FnOnce(&mut Frame) -> T) -> T {
        match self.frame.lock() {
            Ok(mut frame) => f(&mut frame),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl TermLike for FrameBuffer {
    fn width(&self) -> u16 {
        self.with_frame(|frame| frame.width)
    }

    fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_right(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_left(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        self.write_str(s)
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.with_frame(|frame| frame.text.push_str(s));
        Ok(())
    }

    // A redraw starts by clearing the old line.
    fn clear_line(&self) -> io::Result<()> {
        self.with_frame(|frame| frame.text.clear());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
