//! Display models derived from a [`DiffResult`].
//!
//! These carry no styling. A renderer walks the rows and decides colours,
//! gutters and widths on its own.

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_hunk::{Hunk, HunkKind};
use crate::diff_result::DiffResult;

/// Symbol in the middle column of the split view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    #[display(fmt = " ")]
    None,

    #[display(fmt = "+")]
    Added,

    #[display(fmt = "\u{2212}")]
    Removed,

    #[display(fmt = "~")]
    Changed,
}

impl From<HunkKind> for Marker {
    fn from(kind: HunkKind) -> Self {
        match kind {
            HunkKind::Unchanged => Marker::None,
            HunkKind::Added => Marker::Added,
            HunkKind::Removed => Marker::Removed,
            HunkKind::Changed => Marker::Changed,
        }
    }
}

/// One side of a split row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitCell {
    pub line: usize,
    pub content: String,
}

/// One row of the side-by-side view; exactly one per hunk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitRow {
    /// Index of the hunk this row was built from
    pub hunk_index: usize,
    pub kind: HunkKind,
    pub left: Option<SplitCell>,
    pub marker: Marker,
    pub right: Option<SplitCell>,
}

/// Line style in the interleaved view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnifiedLineKind {
    Unchanged,
    Added,
    Removed,
}

impl UnifiedLineKind {
    /// Prefix used by the plain-text export
    pub fn prefix(self) -> &'static str {
        match self {
            UnifiedLineKind::Unchanged => "",
            UnifiedLineKind::Added => "+ ",
            UnifiedLineKind::Removed => "- ",
        }
    }
}

/// One row of the interleaved view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnifiedRow {
    /// Index of the hunk this row was built from
    pub hunk_index: usize,
    pub kind: UnifiedLineKind,
    pub left_line: Option<usize>,
    pub right_line: Option<usize>,
    pub content: String,
}

impl DiffResult {
    /// Rows for the side-by-side view
    pub fn split_rows(&self) -> Vec<SplitRow> {
        self.hunks()
            .iter()
            .enumerate()
            .map(|(hunk_index, hunk)| {
                let cell = |line: Option<usize>, content: Option<&str>| {
                    line.zip(content).map(|(line, content)| SplitCell {
                        line,
                        content: content.to_string(),
                    })
                };

                SplitRow {
                    hunk_index,
                    kind: hunk.kind(),
                    left: cell(hunk.left_line(), hunk.left_content()),
                    marker: hunk.kind().into(),
                    right: cell(hunk.right_line(), self.right_content(hunk_index)),
                }
            })
            .collect()
    }

    /// Rows for the interleaved view.
    ///
    /// A changed hunk becomes its removed row followed by its added row.
    /// Unchanged rows show the left text.
    pub fn unified_rows(&self) -> Vec<UnifiedRow> {
        let mut rows = Vec::with_capacity(self.hunk_count());

        for (hunk_index, hunk) in self.hunks().iter().enumerate() {
            match hunk {
                Hunk::Unchanged {
                    left_line,
                    right_line,
                    content,
                } => rows.push(UnifiedRow {
                    hunk_index,
                    kind: UnifiedLineKind::Unchanged,
                    left_line: Some(*left_line),
                    right_line: Some(*right_line),
                    content: content.clone(),
                }),
                Hunk::Added {
                    right_line,
                    content,
                } => rows.push(UnifiedRow {
                    hunk_index,
                    kind: UnifiedLineKind::Added,
                    left_line: None,
                    right_line: Some(*right_line),
                    content: content.clone(),
                }),
                Hunk::Removed { left_line, content } => rows.push(UnifiedRow {
                    hunk_index,
                    kind: UnifiedLineKind::Removed,
                    left_line: Some(*left_line),
                    right_line: None,
                    content: content.clone(),
                }),
                Hunk::Changed {
                    left_line,
                    right_line,
                    left_content,
                    right_content,
                } => {
                    rows.push(UnifiedRow {
                        hunk_index,
                        kind: UnifiedLineKind::Removed,
                        left_line: Some(*left_line),
                        right_line: None,
                        content: left_content.clone(),
                    });
                    rows.push(UnifiedRow {
                        hunk_index,
                        kind: UnifiedLineKind::Added,
                        left_line: None,
                        right_line: Some(*right_line),
                        content: right_content.clone(),
                    });
                }
            }
        }

        rows
    }

    /// Serialize the hunks for the clipboard.
    ///
    /// Unchanged lines are unprefixed, removed lines get `"- "`, added lines
    /// get `"+ "`. Lines are joined with `'\n'` without a trailing newline.
    pub fn to_plain_text(&self) -> String {
        self.unified_rows()
            .iter()
            .map(|row| format!("{}{}", row.kind.prefix(), row.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
