//! Terminal rendering of diff results.

use colored::{ColoredString, Colorize};
use text_diff::{
    DiffResult, HighlightSide, HunkKind, InlineHighlight, Marker, SplitCell, UnifiedLineKind,
};

use crate::config::ViewMode;

/// Render `diff` in the requested view
pub fn render(diff: &DiffResult, view: ViewMode) -> String {
    match view {
        ViewMode::Split => render_split(diff),
        ViewMode::Unified => render_unified(diff),
        ViewMode::Plain => diff.to_plain_text(),
        ViewMode::Stats => render_stats(diff),
    }
}

/// Side-by-side view with a marker column
pub fn render_split(diff: &DiffResult) -> String {
    let number_width = number_width(diff);
    let rows = diff.split_rows();
    let left_width = rows
        .iter()
        .filter_map(|row| row.left.as_ref())
        .map(|cell| cell.content.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());

    for row in &rows {
        let highlight = diff.hunk(row.hunk_index).and_then(|hunk| hunk.highlight());

        let (left_text, left_len) = match (&row.left, &highlight) {
            (Some(cell), Some((removed, _))) => (paint_spans(removed), char_len(cell)),
            (Some(cell), None) => (
                paint_line(&cell.content, row.kind, Side::Left),
                char_len(cell),
            ),
            (None, _) => (String::new(), 0),
        };
        let right_text = match (&row.right, &highlight) {
            (Some(_), Some((_, added))) => paint_spans(added),
            (Some(cell), None) => paint_line(&cell.content, row.kind, Side::Right),
            (None, _) => String::new(),
        };

        let line = format!(
            "{:>nw$} {}{} {} {:>nw$} {}",
            line_number(row.left.as_ref().map(|cell| cell.line)),
            left_text,
            " ".repeat(left_width.saturating_sub(left_len)),
            paint_marker(row.marker),
            line_number(row.right.as_ref().map(|cell| cell.line)),
            right_text,
            nw = number_width,
        );
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Interleaved view carrying both line numbers
pub fn render_unified(diff: &DiffResult) -> String {
    let number_width = number_width(diff);

    diff.unified_rows()
        .iter()
        .map(|row| {
            let highlight = diff.hunk(row.hunk_index).and_then(|hunk| hunk.highlight());
            let (prefix, content) = match (row.kind, highlight) {
                (UnifiedLineKind::Removed, Some((removed, _))) => {
                    ("-".red(), paint_spans(&removed))
                }
                (UnifiedLineKind::Added, Some((_, added))) => ("+".green(), paint_spans(&added)),
                (UnifiedLineKind::Removed, None) => {
                    ("-".red(), row.content.as_str().red().to_string())
                }
                (UnifiedLineKind::Added, None) => {
                    ("+".green(), row.content.as_str().green().to_string())
                }
                (UnifiedLineKind::Unchanged, _) => (" ".normal(), row.content.clone()),
            };

            let line = format!(
                "{:>nw$} {:>nw$} {}{}",
                line_number(row.left_line),
                line_number(row.right_line),
                prefix,
                content,
                nw = number_width,
            );
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stats badge plus hunk totals
pub fn render_stats(diff: &DiffResult) -> String {
    format!(
        "{} ({} hunks, {} left lines, {} right lines)",
        diff.stats(),
        diff.hunk_count(),
        diff.left_line_count(),
        diff.right_line_count()
    )
}

/// Every navigation stop, in order
pub fn render_changes(diff: &DiffResult) -> String {
    let index = diff.navigation();
    if index.is_empty() {
        return "No changes".to_string();
    }

    index
        .positions()
        .iter()
        .enumerate()
        .filter_map(|(position, &hunk_index)| {
            diff.hunk(hunk_index).map(|hunk| {
                format!(
                    "[{}/{}] hunk #{} {} left:{} right:{}",
                    position + 1,
                    index.len(),
                    hunk_index,
                    hunk.kind(),
                    optional_number(hunk.left_line()),
                    optional_number(hunk.right_line()),
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn number_width(diff: &DiffResult) -> usize {
    diff.left_line_count()
        .max(diff.right_line_count())
        .max(1)
        .to_string()
        .len()
}

fn char_len(cell: &SplitCell) -> usize {
    cell.content.chars().count()
}

fn line_number(line: Option<usize>) -> String {
    line.map(|line| line.to_string()).unwrap_or_default()
}

fn optional_number(line: Option<usize>) -> String {
    line.map(|line| line.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn paint_line(content: &str, kind: HunkKind, side: Side) -> String {
    match (kind, side) {
        (HunkKind::Removed, Side::Left) | (HunkKind::Changed, Side::Left) => {
            content.red().to_string()
        }
        (HunkKind::Added, Side::Right) | (HunkKind::Changed, Side::Right) => {
            content.green().to_string()
        }
        _ => content.to_string(),
    }
}

fn paint_marker(marker: Marker) -> ColoredString {
    let symbol = marker.to_string();
    let symbol = symbol.as_str();
    match marker {
        Marker::None => symbol.normal(),
        Marker::Added => symbol.green(),
        Marker::Removed => symbol.red(),
        Marker::Changed => symbol.yellow(),
    }
}

fn paint_spans(highlight: &InlineHighlight) -> String {
    highlight
        .spans
        .iter()
        .map(|span| {
            let text = match highlight.side {
                HighlightSide::Added => span.text.as_str().green(),
                HighlightSide::Removed => span.text.as_str().red(),
            };
            if span.is_highlighted() {
                text.bold().underline().to_string()
            } else {
                text.to_string()
            }
        })
        .collect()
}
