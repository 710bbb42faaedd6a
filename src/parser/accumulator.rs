//! Paragraph accumulation.
//!
//! Consecutive plain lines are merged into one logical paragraph joined by
//! single spaces. A plain line starting with a bare `#` or `-` closes the
//! paragraph in progress and opens the next one. Headings and bullets are
//! always one line each. Every input line is pulled from the underlying
//! iterator exactly once.

use std::borrow::Cow;
use std::mem;

use crate::model::HeadingLevel;

use super::line::{classify, LineKind};

/// A logical unit of summary text, ready to become one or more blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalUnit<'a> {
    /// A heading line
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Verbatim heading text
        text: &'a str,
    },
    /// A bullet line, without its prefix
    Bullet(&'a str),
    /// One or more merged plain lines
    Paragraph(Cow<'a, str>),
}

/// Accumulator state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State<'a> {
    /// Not building a paragraph
    Idle,
    /// Merging plain lines into a paragraph
    Building(Cow<'a, str>),
}

/// Iterator turning lines into [`LogicalUnit`]s.
#[derive(Debug, Clone)]
pub struct LogicalUnits<'a, I> {
    lines: I,
    state: State<'a>,
    // A heading or bullet that ended a paragraph waits here while the
    // paragraph is returned first.
    pending: Option<LogicalUnit<'a>>,
}

impl<'a, I> LogicalUnits<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    /// Wrap an iterator of lines.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: State::Idle,
            pending: None,
        }
    }

    /// Whether a paragraph is currently being built.
    pub fn is_building(&self) -> bool {
        matches!(self.state, State::Building(_))
    }

    fn close_paragraph(&mut self) -> Option<LogicalUnit<'a>> {
        match mem::replace(&mut self.state, State::Idle) {
            State::Building(text) => Some(LogicalUnit::Paragraph(text)),
            State::Idle => None,
        }
    }

    fn absorb(&mut self, line: &'a str) {
        match self.state {
            State::Idle => self.state = State::Building(Cow::Borrowed(line)),
            State::Building(ref mut text) => {
                let text = text.to_mut();
                text.push(' ');
                text.push_str(line);
            }
        }
    }

    /// Emit `unit`, returning a paragraph in progress ahead of it.
    fn emit(&mut self, unit: LogicalUnit<'a>) -> LogicalUnit<'a> {
        match self.close_paragraph() {
            Some(paragraph) => {
                self.pending = Some(unit);
                paragraph
            }
            None => unit,
        }
    }
}

impl<'a, I> Iterator for LogicalUnits<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = LogicalUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(unit) = self.pending.take() {
            return Some(unit);
        }

        loop {
            let Some(line) = self.lines.next() else {
                return self.close_paragraph();
            };

            let kind = classify(line);
            if let LineKind::Plain(text) = kind {
                if self.is_building() && !kind.continues_paragraph() {
                    let paragraph = self.close_paragraph();
                    self.absorb(text);
                    return paragraph;
                }
            }

            match kind {
                LineKind::Blank => {
                    if let Some(paragraph) = self.close_paragraph() {
                        return Some(paragraph);
                    }
                }
                LineKind::Heading { level, text } => {
                    return Some(self.emit(LogicalUnit::Heading { level, text }));
                }
                LineKind::Bullet(text) => {
                    return Some(self.emit(LogicalUnit::Bullet(text)));
                }
                LineKind::Plain(text) => self.absorb(text),
            }
        }
    }
}

/// Split `text` into lines and accumulate them into logical units.
pub fn logical_units(text: &str) -> LogicalUnits<'_, std::str::Lines<'_>> {
    LogicalUnits::new(text.lines())
}
