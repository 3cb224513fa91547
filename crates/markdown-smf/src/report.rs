use std::fmt;

use crate::line::content_lines;
use crate::text::count_words;

/// Prefix of a comment that marks an open to-do.
pub const TODO_PREFIX: &str = "> TODO:";

/// Progress figures printed by the word-count mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordReport {
    pub words: usize,
    pub todos: usize,
}

/// Counts words and open to-dos without converting the manuscript.
pub fn word_report(text: &str) -> WordReport {
    let lines = content_lines(text);
    WordReport {
        words: count_words(&lines),
        todos: lines
            .iter()
            .filter(|line| line.starts_with(TODO_PREFIX))
            .count(),
    }
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word count: {}", self.words)?;
        write!(f, "Remaining to-dos: {}", self.todos)
    }
}
