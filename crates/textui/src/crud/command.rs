//! Command line parsing for the CRUD screen.
//!
//! A typed line is matched against one pattern per command, in a fixed
//! order; the first match wins. All patterns are anchored and case
//! insensitive. Only the row and page commands take digits.

use regex::{Regex, RegexBuilder};

use super::bindings::{Action, Bindings, Navigation};

/// A parsed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Toggle the selection of a row of the current page.
    Row(usize),
    /// Jump to a page.
    Page(usize),
    /// Move back some pages.
    Previous(usize),
    /// Move forward some pages.
    Next(usize),
    Action(Action),
    Unknown,
}

#[derive(Debug)]
pub struct CommandParser {
    row: Regex,
    page: Regex,
    previous: Regex,
    next: Regex,
    actions: Vec<(Action, Regex)>,
}

fn pattern(body: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^{}$", body))
        .case_insensitive(true)
        .build()
}

fn key(c: char) -> String {
    regex::escape(&c.to_string())
}

/// Digits that do not fit in a `usize` can never name an existing row or
/// page, so they saturate instead of failing.
fn number(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

impl CommandParser {
    pub fn new(bindings: &Bindings, navigation: &Navigation) -> Result<Self, regex::Error> {
        let actions = bindings
            .keys()
            .map(|(action, k)| pattern(&key(k)).map(|re| (action, re)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CommandParser {
            row: pattern("([0-9]+)")?,
            page: pattern(&format!("{}([0-9]+)", key(navigation.select_page)))?,
            previous: pattern(&format!("{}([0-9]*)", key(navigation.previous_page)))?,
            next: pattern(&format!("{}([0-9]*)", key(navigation.next_page)))?,
            actions,
        })
    }

    /// Parse one line. Surrounding whitespace is ignored.
    pub fn parse(&self, line: &str) -> Command {
        let line = line.trim();

        if let Some(caps) = self.row.captures(line) {
            return Command::Row(number(&caps[1]));
        }
        if let Some(caps) = self.page.captures(line) {
            return Command::Page(number(&caps[1]));
        }
        if let Some(caps) = self.previous.captures(line) {
            return Command::Previous(count(&caps[1]));
        }
        if let Some(caps) = self.next.captures(line) {
            return Command::Next(count(&caps[1]));
        }
        self.actions
            .iter()
            .find(|(_, re)| re.is_match(line))
            .map(|(action, _)| Command::Action(*action))
            .unwrap_or(Command::Unknown)
    }
}

fn count(digits: &str) -> usize {
    if digits.is_empty() {
        1
    } else {
        number(digits)
    }
}
