use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::highlight::{highlight_line, HighlightSide, InlineHighlight};

/// A single aligned step, before adjacent removals and additions are merged.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOp {
    /// Line present on both sides (compared equal under the active options)
    Unchanged {
        left_line: usize,
        right_line: usize,
        content: String,
    },

    /// Line only present on the right
    Added { right_line: usize, content: String },

    /// Line only present on the left
    Removed { left_line: usize, content: String },
}

/// The type of a hunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HunkKind {
    /// The line exists on both sides
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// The line only exists on the right side
    #[display(fmt = "Added")]
    Added,

    /// The line only exists on the left side
    #[display(fmt = "Removed")]
    Removed,

    /// A removed line directly followed by an added line
    #[display(fmt = "Changed")]
    Changed,
}

/// A classified diff unit, possibly merged from two edit operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hunk {
    /// Content is the left line's original text
    Unchanged {
        left_line: usize,
        right_line: usize,
        content: String,
    },

    Added { right_line: usize, content: String },

    Removed { left_line: usize, content: String },

    Changed {
        left_line: usize,
        right_line: usize,
        left_content: String,
        right_content: String,
    },
}

impl Hunk {
    /// Get the type of this hunk
    pub fn kind(&self) -> HunkKind {
        match self {
            Hunk::Unchanged { .. } => HunkKind::Unchanged,
            Hunk::Added { .. } => HunkKind::Added,
            Hunk::Removed { .. } => HunkKind::Removed,
            Hunk::Changed { .. } => HunkKind::Changed,
        }
    }

    /// Whether prev/next navigation stops at this hunk
    pub fn is_navigable(&self) -> bool {
        self.kind() != HunkKind::Unchanged
    }

    /// Line number on the left side, if the hunk has one
    pub fn left_line(&self) -> Option<usize> {
        match self {
            Hunk::Unchanged { left_line, .. }
            | Hunk::Removed { left_line, .. }
            | Hunk::Changed { left_line, .. } => Some(*left_line),
            Hunk::Added { .. } => None,
        }
    }

    /// Line number on the right side, if the hunk has one
    pub fn right_line(&self) -> Option<usize> {
        match self {
            Hunk::Unchanged { right_line, .. }
            | Hunk::Added { right_line, .. }
            | Hunk::Changed { right_line, .. } => Some(*right_line),
            Hunk::Removed { .. } => None,
        }
    }

    /// Text shown on the left side, if any
    pub fn left_content(&self) -> Option<&str> {
        match self {
            Hunk::Unchanged { content, .. } | Hunk::Removed { content, .. } => Some(content),
            Hunk::Changed { left_content, .. } => Some(left_content),
            Hunk::Added { .. } => None,
        }
    }

    /// Text carried for the right side, if any.
    ///
    /// Unchanged hunks only carry the left text, so this is `None` for them;
    /// [`DiffResult::right_content`](crate::DiffResult::right_content) looks
    /// the right line up instead.
    pub fn right_content(&self) -> Option<&str> {
        match self {
            Hunk::Added { content, .. } => Some(content),
            Hunk::Changed { right_content, .. } => Some(right_content),
            Hunk::Unchanged { .. } | Hunk::Removed { .. } => None,
        }
    }

    /// Character highlighting for both halves of a changed hunk.
    ///
    /// Returns `(removed, added)`; `None` for every other hunk type.
    pub fn highlight(&self) -> Option<(InlineHighlight, InlineHighlight)> {
        match self {
            Hunk::Changed {
                left_content,
                right_content,
                ..
            } => Some((
                highlight_line(left_content, right_content, HighlightSide::Removed),
                highlight_line(right_content, left_content, HighlightSide::Added),
            )),
            _ => None,
        }
    }
}

impl From<EditOp> for Hunk {
    fn from(op: EditOp) -> Self {
        match op {
            EditOp::Unchanged {
                left_line,
                right_line,
                content,
            } => Hunk::Unchanged {
                left_line,
                right_line,
                content,
            },
            EditOp::Added {
                right_line,
                content,
            } => Hunk::Added {
                right_line,
                content,
            },
            EditOp::Removed { left_line, content } => Hunk::Removed { left_line, content },
        }
    }
}

/// Merge an edit list into hunks.
///
/// Only a removal immediately followed by an addition becomes a `Changed`
/// hunk. Longer runs pair up position by position as the scan advances.
pub fn merge_edit_ops(ops: Vec<EditOp>) -> Vec<Hunk> {
    let mut hunks = Vec::with_capacity(ops.len());
    let mut ops = ops.into_iter().peekable();

    while let Some(op) = ops.next() {
        match op {
            EditOp::Removed { left_line, content } => {
                match ops.next_if(|next| matches!(next, EditOp::Added { .. })) {
                    Some(EditOp::Added {
                        right_line,
                        content: right_content,
                    }) => hunks.push(Hunk::Changed {
                        left_line,
                        right_line,
                        left_content: content,
                        right_content,
                    }),
                    _ => hunks.push(Hunk::Removed { left_line, content }),
                }
            }
            other => hunks.push(other.into()),
        }
    }

    hunks
}
