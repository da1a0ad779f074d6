//! Terminal abstraction.
//!
//! Everything that touches the real terminal goes through the [`Terminal`]
//! trait: size detection, writing text, sending ANSI commands and reading a
//! line of input. Widgets and screens take `&mut dyn Terminal`, so tests can
//! drive them with a [`MockTerminal`] that replays scripted input and captures
//! everything written.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::RenderError;

/// ANSI control sequences used by the toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCommand {
    /// Move the cursor home and clear the whole screen.
    ClearScreen,
    /// Erase the entire current line.
    ClearLine,
    /// Move the cursor to the start of the current line.
    GotoLineStart,
}

impl AnsiCommand {
    /// The raw escape sequence for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnsiCommand::ClearScreen => "\x1b[H\x1b[2J",
            AnsiCommand::ClearLine => "\x1b[2K",
            AnsiCommand::GotoLineStart => "\r",
        }
    }
}

/// Abstraction over the controlling terminal.
pub trait Terminal {
    /// Number of columns of the terminal.
    fn columns(&self) -> Result<usize, RenderError>;

    /// Number of lines of the terminal.
    fn lines(&self) -> Result<usize, RenderError>;

    /// Write text as-is.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one raw line of input, including the line terminator.
    ///
    /// An empty string means end of input.
    fn read_line(&mut self) -> io::Result<String>;

    /// Read one line without echoing it. Defaults to [`read_line`](Self::read_line).
    fn read_secret_line(&mut self) -> io::Result<String> {
        self.read_line()
    }

    /// Send an ANSI control sequence.
    fn send(&mut self, command: AnsiCommand) -> io::Result<()> {
        self.write(command.as_str())
    }

    /// Write text followed by a line break.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Read one line and trim surrounding whitespace.
    ///
    /// Returns `None` at end of input.
    fn read_trimmed(&mut self) -> io::Result<Option<String>> {
        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// The process's real terminal.
///
/// Size comes from `terminal_size`, output goes through `console::Term`,
/// input is read line by line from stdin.
#[derive(Debug, Clone)]
pub struct StdTerminal {
    term: console::Term,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            term: console::Term::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(unix, windows))]
fn detect_size() -> Result<(usize, usize), RenderError> {
    terminal_size::terminal_size()
        .map(|(w, h)| (w.0 as usize, h.0 as usize))
        .ok_or(RenderError::TerminalSizeUnavailable)
}

#[cfg(not(any(unix, windows)))]
fn detect_size() -> Result<(usize, usize), RenderError> {
    Err(RenderError::UnknownPlatform)
}

impl Terminal for StdTerminal {
    fn columns(&self) -> Result<usize, RenderError> {
        detect_size().map(|(columns, _)| columns)
    }

    fn lines(&self) -> Result<usize, RenderError> {
        detect_size().map(|(_, lines)| lines)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn read_secret_line(&mut self) -> io::Result<String> {
        // read_secure_line strips the terminator; put it back so EOF stays distinguishable
        let line = self.term.read_secure_line()?;
        Ok(format!("{}\n", line))
    }
}

/// Scripted terminal for tests.
///
/// Reports a fixed size, answers `read_line` from a queue of responses (end
/// of input once the queue is empty) and records all output.
#[derive(Debug, Clone)]
pub struct MockTerminal {
    size: Option<(usize, usize)>,
    responses: VecDeque<String>,
    output: String,
}

impl MockTerminal {
    /// A terminal of the given size with no scripted input.
    pub fn new(columns: usize, lines: usize) -> Self {
        Self {
            size: Some((columns, lines)),
            responses: VecDeque::new(),
            output: String::new(),
        }
    }

    /// A terminal whose size cannot be detected.
    pub fn without_size() -> Self {
        Self {
            size: None,
            responses: VecDeque::new(),
            output: String::new(),
        }
    }

    /// Queue input lines, returned in order by `read_line`.
    pub fn with_responses(mut self, responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.responses.extend(responses.into_iter().map(Into::into));
        self
    }

    /// Queue one more input line.
    pub fn push_response(&mut self, response: impl Into<String>) {
        self.responses.push_back(response.into());
    }

    /// Change the reported size.
    pub fn resize(&mut self, columns: usize, lines: usize) {
        self.size = Some((columns, lines));
    }

    /// Everything written so far, ANSI commands included.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output written since the last clear-screen command.
    pub fn last_screen(&self) -> &str {
        let marker = AnsiCommand::ClearScreen.as_str();
        match self.output.rfind(marker) {
            Some(pos) => &self.output[pos + marker.len()..],
            None => &self.output,
        }
    }

    /// Number of clear-screen commands sent so far.
    pub fn clear_count(&self) -> usize {
        self.output.matches(AnsiCommand::ClearScreen.as_str()).count()
    }

    /// Number of scripted lines not read yet.
    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }

    /// Drop captured output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl Terminal for MockTerminal {
    fn columns(&self) -> Result<usize, RenderError> {
        self.size
            .map(|(columns, _)| columns)
            .ok_or(RenderError::TerminalSizeUnavailable)
    }

    fn lines(&self) -> Result<usize, RenderError> {
        self.size
            .map(|(_, lines)| lines)
            .ok_or(RenderError::TerminalSizeUnavailable)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        Ok(self
            .responses
            .pop_front()
            .map(|line| format!("{}\n", line))
            .unwrap_or_default())
    }
}
