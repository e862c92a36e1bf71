//! Line editing and command recall for the input prompt.

/// Editable input line. `cursor` is a byte offset that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert typed text at the cursor, skipping control characters.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|c| !c.is_control()) {
            self.text.insert(self.cursor, ch);
            self.cursor += ch.len_utf8();
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.text.replace_range(prev..self.cursor, "");
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(next) => {
                self.text.replace_range(self.cursor..next, "");
                true
            }
            None => false,
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Replace the whole line and move the cursor to its end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Hand the line over for submission and start a new one.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

/// Previously submitted lines, browsed with the arrow keys.
#[derive(Debug, Clone, Default)]
pub struct CommandRecall {
    lines: Vec<String>,
    // Position while browsing; None means editing a new line.
    index: Option<usize>,
}

impl CommandRecall {
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.lines.last().map(String::as_str) != Some(line) {
            self.lines.push(line.to_string());
        }
        self.index = None;
    }

    /// Step back to an older line.
    pub fn older(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let index = match self.index {
            None => self.lines.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.index = Some(index);
        Some(&self.lines[index])
    }

    /// Step forward. Returns an empty line after the newest entry.
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.index?;
        if index + 1 >= self.lines.len() {
            self.index = None;
            return Some("");
        }
        self.index = Some(index + 1);
        Some(&self.lines[index + 1])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut line = LineBuffer::default();
        line.insert_str("cd é");
        assert_eq!(line.cursor(), line.text().len());
        line.left();
        line.insert_str("x");
        assert_eq!(line.text(), "cd xé");
        line.right();
        assert!(line.backspace());
        assert_eq!(line.text(), "cd x");
        line.home();
        assert!(!line.backspace());
        assert!(line.delete());
        assert_eq!(line.text(), "d x");
    }

    #[test]
    fn control_chars_are_dropped() {
        let mut line = LineBuffer::default();
        line.insert_str("ls\n\t");
        assert_eq!(line.text(), "ls");
    }

    #[test]
    fn take_resets_the_line() {
        let mut line = LineBuffer::default();
        line.set("help");
        assert_eq!(line.take(), "help");
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn recall_walks_history_like_a_shell() {
        let mut recall = CommandRecall::default();
        recall.push("ls");
        recall.push("ls");
        recall.push("cd projects");
        recall.push("   ");
        assert_eq!(recall.len(), 2);

        assert_eq!(recall.older(), Some("cd projects"));
        assert_eq!(recall.older(), Some("ls"));
        assert_eq!(recall.older(), Some("ls"));
        assert_eq!(recall.newer(), Some("cd projects"));
        assert_eq!(recall.newer(), Some(""));
        assert_eq!(recall.newer(), None);
    }
}
