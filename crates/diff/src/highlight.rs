//! Character-level highlighting inside a changed hunk.
//!
//! This is a greedy forward scan, not an alignment: once the two lines drift
//! apart every remaining character of the primary line is marked, so an
//! inserted prefix highlights most of the line.

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of a changed hunk a highlight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighlightSide {
    /// The new (right) text, compared against the old one
    #[display(fmt = "Added")]
    Added,

    /// The old (left) text, compared against the new one
    #[display(fmt = "Removed")]
    Removed,
}

/// Whether a span matched the other line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpanKind {
    Plain,
    Highlighted,
}

/// A run of consecutive characters of the same kind
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Plain,
            text: text.into(),
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Highlighted,
            text: text.into(),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.kind == SpanKind::Highlighted
    }
}

/// The highlighted rendition of one line of a changed hunk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InlineHighlight {
    pub side: HighlightSide,
    pub spans: Vec<InlineSpan>,
}

impl InlineHighlight {
    /// Concatenated text of all spans; always equals the primary line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Number of highlighted characters
    pub fn highlighted_chars(&self) -> usize {
        self.spans
            .iter()
            .filter(|span| span.is_highlighted())
            .map(|span| span.text.chars().count())
            .sum()
    }
}

/// Highlight the characters of `primary` that the greedy scan does not match
/// in `other`.
pub fn highlight_line(primary: &str, other: &str, side: HighlightSide) -> InlineHighlight {
    let primary: Vec<char> = primary.chars().collect();
    let other: Vec<char> = other.chars().collect();

    let mut spans: Vec<InlineSpan> = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < primary.len() || j < other.len() {
        if i < primary.len() && j < other.len() && primary[i] == other[j] {
            push_char(&mut spans, SpanKind::Plain, primary[i]);
            i += 1;
            j += 1;
        } else if i < primary.len() {
            push_char(&mut spans, SpanKind::Highlighted, primary[i]);
            i += 1;
        } else {
            j += 1;
        }
    }

    InlineHighlight { side, spans }
}

fn push_char(spans: &mut Vec<InlineSpan>, kind: SpanKind, ch: char) {
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.push(ch),
        _ => spans.push(InlineSpan {
            kind,
            text: ch.to_string(),
        }),
    }
}
