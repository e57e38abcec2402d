use derive_more::Display;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_hunk::{merge_edit_ops, Hunk, HunkKind};
use crate::highlight::InlineHighlight;
use crate::lcs::align;
use crate::line_sequence::LineSequence;
use crate::navigation::NavigationIndex;
use crate::options::ComparisonOptions;

/// Hunk counts by type, taken after merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "+{} \u{2212}{} ~{}", added, removed, changed)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffStats {
    /// Count hunks by type. Unchanged hunks count toward nothing.
    pub fn from_hunks(hunks: &[Hunk]) -> Self {
        let mut stats = Self::default();

        for hunk in hunks {
            match hunk.kind() {
                HunkKind::Added => stats.added += 1,
                HunkKind::Removed => stats.removed += 1,
                HunkKind::Changed => stats.changed += 1,
                HunkKind::Unchanged => {}
            }
        }

        stats
    }

    /// Total number of navigable hunks
    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }
}

/// The result of comparing two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// The hunks, in display order
    hunks: Vec<Hunk>,

    /// Counts by hunk type
    stats: DiffStats,

    /// The number of lines in the left text
    left_line_count: usize,

    /// The right text, kept for unchanged lines that only matched after
    /// normalization
    right: LineSequence,
}

/// Compare two texts line by line.
///
/// Total over all inputs; cost is O(m·n) in time and memory for m left and
/// n right lines.
pub fn compute_diff(
    left_text: &str,
    right_text: &str,
    options: &ComparisonOptions,
) -> DiffResult {
    DiffResult::compute(left_text, right_text, options)
}

impl DiffResult {
    /// Compare two texts line by line
    pub fn compute(left_text: &str, right_text: &str, options: &ComparisonOptions) -> Self {
        let left = LineSequence::from_text(left_text);
        let right = LineSequence::from_text(right_text);
        Self::compute_lines(&left, &right, options)
    }

    /// Compare two already split line sequences
    pub fn compute_lines(
        left: &LineSequence,
        right: &LineSequence,
        options: &ComparisonOptions,
    ) -> Self {
        debug!(
            "Computing diff: {} left lines, {} right lines, {:?}",
            left.len(),
            right.len(),
            options
        );

        let ops = align(left, right, options);
        let hunks = merge_edit_ops(ops);
        let stats = DiffStats::from_hunks(&hunks);

        debug!("Diff produced {} hunks ({})", hunks.len(), stats);

        Self {
            hunks,
            stats,
            left_line_count: left.len(),
            right: right.clone(),
        }
    }

    /// Get the hunks
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    /// Get the number of hunks
    pub fn hunk_count(&self) -> usize {
        self.hunks.len()
    }

    /// Get a hunk by index
    pub fn hunk(&self, index: usize) -> Option<&Hunk> {
        self.hunks.get(index)
    }

    /// Get the counts by hunk type
    pub fn stats(&self) -> DiffStats {
        self.stats
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }

    pub fn left_line_count(&self) -> usize {
        self.left_line_count
    }

    pub fn right_line_count(&self) -> usize {
        self.right.len()
    }

    /// Right-side text of a hunk as it appears in the right input.
    ///
    /// Differs from the hunk's own content for unchanged lines that only
    /// matched under the comparison options.
    pub fn right_content(&self, hunk_index: usize) -> Option<&str> {
        match self.hunks.get(hunk_index)? {
            Hunk::Unchanged { right_line, .. } => self.right.line(*right_line),
            hunk => hunk.right_content(),
        }
    }

    /// Build the prev/next index over this result
    pub fn navigation(&self) -> NavigationIndex {
        NavigationIndex::new(&self.hunks)
    }

    /// Character highlighting of every changed hunk, keyed by hunk index.
    ///
    /// Each entry holds `(removed, added)` highlights.
    pub fn inline_highlights(&self) -> Vec<(usize, InlineHighlight, InlineHighlight)> {
        self.hunks
            .iter()
            .enumerate()
            .filter_map(|(index, hunk)| {
                hunk.highlight()
                    .map(|(removed, added)| (index, removed, added))
            })
            .collect()
    }
}
