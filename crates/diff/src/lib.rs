// Line diff engine for the developer toolbox
// Aligns two texts with an LCS table, merges the result into hunks and
// derives highlighting, navigation and display rows from it.

mod diff_hunk;
mod diff_result;
mod highlight;
mod lcs;
mod line_sequence;
mod navigation;
mod normalize;
mod options;
mod view;

pub use diff_hunk::{merge_edit_ops, EditOp, Hunk, HunkKind};
pub use diff_result::{compute_diff, DiffResult, DiffStats};
pub use highlight::{highlight_line, HighlightSide, InlineHighlight, InlineSpan, SpanKind};
pub use lcs::{align, LcsTable};
pub use line_sequence::LineSequence;
pub use navigation::{Direction, NavigationCursor, NavigationIndex};
pub use normalize::comparison_key;
pub use options::ComparisonOptions;
pub use view::{Marker, SplitCell, SplitRow, UnifiedLineKind, UnifiedRow};
