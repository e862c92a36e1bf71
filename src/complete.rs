//! Tab completion for the input line.

use crate::command::{self, CommandKind};
use crate::content::Content;
use crate::session::Location;

const MAX_SUGGESTIONS: usize = 5;

/// Suggestions for the word under the cursor at the end of `input`.
pub fn suggest(input: &str, content: &Content) -> Vec<String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let current = if input.ends_with(char::is_whitespace) {
        ""
    } else {
        words.last().copied().unwrap_or("")
    };
    let position = if current.is_empty() {
        words.len()
    } else {
        words.len().saturating_sub(1)
    };

    let mut suggestions: Vec<String> = if position == 0 {
        if current.is_empty() {
            return Vec::new();
        }
        let lower = current.to_lowercase();
        command::listed_names()
            .filter(|name| name.starts_with(&lower) && *name != lower)
            .map(str::to_string)
            .collect()
    } else if position == 1 {
        match CommandKind::from_name(words[0]) {
            Some(CommandKind::Cd) => Location::CHILDREN
                .iter()
                .map(|loc| loc.name())
                .chain(std::iter::once(".."))
                .filter(|name| name.starts_with(current) && *name != current)
                .map(str::to_string)
                .collect(),
            Some(CommandKind::Open) => content
                .projects
                .iter()
                .map(|p| p.id.as_str())
                .filter(|id| id.starts_with(current) && *id != current)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    } else {
        Vec::new()
    };

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Replace the word being typed with `suggestion`.
pub fn apply(input: &str, suggestion: &str) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();
    let keep = if input.ends_with(char::is_whitespace) {
        words.len()
    } else {
        words.len().saturating_sub(1)
    };

    let mut line = words[..keep].join(" ");
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(suggestion);
    // Command names usually take an argument next.
    if keep == 0 {
        line.push(' ');
    }
    line
}

/// Cycles through the current suggestions on repeated Tab presses.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    suggestions: Vec<String>,
    index: Option<usize>,
    // The line as typed before cycling started.
    base: String,
}

impl Completion {
    /// Recompute suggestions after the line changed.
    pub fn refresh(&mut self, input: &str, content: &Content) {
        self.suggestions = suggest(input, content);
        self.index = None;
        self.base = input.to_string();
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.index = None;
        self.base.clear();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.index
    }

    /// Advance to the next suggestion and return the completed line.
    pub fn advance(&mut self) -> Option<String> {
        if self.suggestions.is_empty() {
            return None;
        }
        let index = match self.index {
            None => 0,
            Some(i) => (i + 1) % self.suggestions.len(),
        };
        self.index = Some(index);
        Some(apply(&self.base, &self.suggestions[index]))
    }
}
