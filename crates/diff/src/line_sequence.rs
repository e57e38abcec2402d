use ropey::Rope;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lines of one side of a diff.
///
/// Text is split on `'\n'` only. A trailing newline produces a trailing empty
/// line and the empty string produces no lines at all. Positions handed out
/// by the rest of the crate are 1-based; indexing here is 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split `text` into lines.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let rope = Rope::from_str(text);
        let lines = rope
            .lines()
            .map(|slice| {
                let mut line = String::from(slice);
                if line.ends_with('\n') {
                    line.pop();
                }
                line
            })
            .collect();

        Self { lines }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by its 1-based display number
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }
}

impl Index<usize> for LineSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl From<&str> for LineSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
