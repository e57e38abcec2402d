//! Longest-common-subsequence alignment of two line sequences.

use log::trace;
use std::borrow::Cow;

use crate::diff_hunk::EditOp;
use crate::line_sequence::LineSequence;
use crate::normalize::comparison_key;
use crate::options::ComparisonOptions;

/// Dynamic-programming table of LCS lengths.
///
/// Cell `(i, j)` holds the LCS length of the first `i` left keys and the
/// first `j` right keys. Stored row-major in one buffer of `(m+1) * (n+1)`
/// `u32` cells.
#[derive(Debug, Clone)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Fill the table for the given key sequences.
    pub fn build<K: PartialEq>(left: &[K], right: &[K]) -> Self {
        let cols = right.len() + 1;
        let mut cells = vec![0u32; (left.len() + 1) * cols];

        for i in 1..=left.len() {
            for j in 1..=right.len() {
                let value = if left[i - 1] == right[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
                cells[i * cols + j] = value;
            }
        }

        Self { cols, cells }
    }

    /// LCS length of the first `i` left and first `j` right keys.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j] as usize
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the full common subsequence.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows() - 1, self.cols - 1)
    }
}

/// Align two line sequences and return the edit operations in display order.
pub fn align(
    left: &LineSequence,
    right: &LineSequence,
    options: &ComparisonOptions,
) -> Vec<EditOp> {
    let left_keys: Vec<Cow<'_, str>> = left
        .iter()
        .map(|line| comparison_key(line, options))
        .collect();
    let right_keys: Vec<Cow<'_, str>> = right
        .iter()
        .map(|line| comparison_key(line, options))
        .collect();

    let table = LcsTable::build(&left_keys, &right_keys);
    trace!(
        "LCS table {}x{}, common lines: {}",
        table.rows(),
        table.cols(),
        table.lcs_len()
    );

    backtrack(&table, &left_keys, &right_keys, left, right)
}

/// Walk the table from the bottom-right corner back to the origin.
///
/// On equal predecessor scores the step is classified as an addition.
fn backtrack<K: PartialEq>(
    table: &LcsTable,
    left_keys: &[K],
    right_keys: &[K],
    left: &LineSequence,
    right: &LineSequence,
) -> Vec<EditOp> {
    let mut ops = Vec::with_capacity(left_keys.len() + right_keys.len());
    let mut i = left_keys.len();
    let mut j = right_keys.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left_keys[i - 1] == right_keys[j - 1] {
            ops.push(EditOp::Unchanged {
                left_line: i,
                right_line: j,
                content: left[i - 1].to_string(),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOp::Added {
                right_line: j,
                content: right[j - 1].to_string(),
            });
            j -= 1;
        } else {
            ops.push(EditOp::Removed {
                left_line: i,
                content: left[i - 1].to_string(),
            });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
