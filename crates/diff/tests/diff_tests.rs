use pretty_assertions::assert_eq;
use text_diff::{
    compute_diff, ComparisonOptions, DiffResult, DiffStats, HighlightSide, Hunk, HunkKind,
    InlineHighlight, InlineSpan,
};

fn exact() -> ComparisonOptions {
    ComparisonOptions::default()
}

#[test]
fn test_empty_texts() {
    // Two empty texts produce no hunks at all
    let diff = compute_diff("", "", &exact());

    assert_eq!(diff.hunk_count(), 0);
    assert_eq!(diff.stats(), DiffStats::default());
    assert!(!diff.has_changes());
}

#[test]
fn test_identical_texts() {
    // Identical texts produce one unchanged hunk per line
    let text = "Line 1\nLine 2\nLine 3\n";
    let diff = compute_diff(text, text, &exact());

    // Trailing newline yields a trailing empty line
    assert_eq!(diff.hunk_count(), 4);
    assert!(diff.hunks().iter().all(|h| h.kind() == HunkKind::Unchanged));
    assert_eq!(diff.stats(), DiffStats::default());
}

#[test]
fn test_added_text() {
    // Left side empty: every right line is added
    let diff = compute_diff("", "Line 1\nLine 2", &exact());

    assert_eq!(
        diff.hunks(),
        &[
            Hunk::Added {
                right_line: 1,
                content: "Line 1".into()
            },
            Hunk::Added {
                right_line: 2,
                content: "Line 2".into()
            },
        ]
    );
    assert_eq!(diff.stats().added, 2);
    assert_eq!(diff.stats().removed, 0);
    assert_eq!(diff.stats().changed, 0);
}

#[test]
fn test_removed_text() {
    // Right side empty: every left line is removed
    let diff = compute_diff("Line 1\nLine 2", "", &exact());

    assert_eq!(
        diff.hunks(),
        &[
            Hunk::Removed {
                left_line: 1,
                content: "Line 1".into()
            },
            Hunk::Removed {
                left_line: 2,
                content: "Line 2".into()
            },
        ]
    );
    assert_eq!(diff.stats().removed, 2);
    assert_eq!(diff.stats().added, 0);
}

#[test]
fn test_modified_line_becomes_changed_hunk() {
    let diff = compute_diff(
        "Line 1\nLine 2\nLine 3",
        "Line 1\nLine X\nLine 3",
        &exact(),
    );

    assert_eq!(
        diff.hunks(),
        &[
            Hunk::Unchanged {
                left_line: 1,
                right_line: 1,
                content: "Line 1".into()
            },
            Hunk::Changed {
                left_line: 2,
                right_line: 2,
                left_content: "Line 2".into(),
                right_content: "Line X".into()
            },
            Hunk::Unchanged {
                left_line: 3,
                right_line: 3,
                content: "Line 3".into()
            },
        ]
    );
    assert_eq!(
        diff.stats(),
        DiffStats {
            added: 0,
            removed: 0,
            changed: 1
        }
    );
}

#[test]
fn test_ignore_case() {
    let options = ComparisonOptions::new().ignore_case(true);
    let diff = compute_diff("Hello", "hello", &options);

    assert_eq!(
        diff.hunks(),
        &[Hunk::Unchanged {
            left_line: 1,
            right_line: 1,
            content: "Hello".into()
        }]
    );

    let diff = compute_diff("Hello", "hello", &exact());
    assert_eq!(
        diff.hunks(),
        &[Hunk::Changed {
            left_line: 1,
            right_line: 1,
            left_content: "Hello".into(),
            right_content: "hello".into()
        }]
    );
}

#[test]
fn test_ignore_whitespace() {
    let options = ComparisonOptions::new().ignore_whitespace(true);
    let diff = compute_diff("a   b", "a b", &options);

    // Display text keeps the original spacing
    assert_eq!(
        diff.hunks(),
        &[Hunk::Unchanged {
            left_line: 1,
            right_line: 1,
            content: "a   b".into()
        }]
    );
}

#[test]
fn test_whitespace_change_detected_without_option() {
    let diff = compute_diff("Line 1\nLine 2\n", "Line 1\nLine  2\n", &exact());

    assert!(diff.has_changes());
    assert_eq!(diff.stats().changed, 1);
}

#[test]
fn test_adjacent_removed_and_added_merge() {
    // Only the removal directly before the addition pairs up
    let diff = compute_diff("X\nY", "A", &exact());

    assert_eq!(
        diff.hunks(),
        &[
            Hunk::Removed {
                left_line: 1,
                content: "X".into()
            },
            Hunk::Changed {
                left_line: 2,
                right_line: 1,
                left_content: "Y".into(),
                right_content: "A".into()
            },
        ]
    );
}

#[test]
fn test_stats_count_merged_hunks_once() {
    let diff = compute_diff("a\nb\nc", "x", &exact());

    assert_eq!(
        diff.stats(),
        DiffStats {
            added: 0,
            removed: 2,
            changed: 1
        }
    );
    assert_eq!(diff.stats().total(), 3);
}

#[test]
fn test_replaced_block_pairs_only_at_the_seam() {
    let diff = compute_diff("a\nb", "c\nd", &exact());

    let kinds: Vec<HunkKind> = diff.hunks().iter().map(|h| h.kind()).collect();
    assert_eq!(
        kinds,
        vec![HunkKind::Removed, HunkKind::Changed, HunkKind::Added]
    );
}

#[test]
fn test_line_counts() {
    let diff = compute_diff("a\nb\n", "a", &exact());

    assert_eq!(diff.left_line_count(), 3);
    assert_eq!(diff.right_line_count(), 1);
}

#[test]
fn test_compute_is_idempotent() {
    let left = "fn main() {\n    println!(\"hi\");\n}\n";
    let right = "fn main() {\n    let name = \"Rust\";\n    println!(\"hi {}\", name);\n}\n";
    let options = ComparisonOptions::new().ignore_whitespace(true);

    let first = DiffResult::compute(left, right, &options);
    let second = DiffResult::compute(left, right, &options);

    assert_eq!(first, second);
}

#[test]
fn test_hunk_kind_display() {
    assert_eq!(HunkKind::Unchanged.to_string(), "Unchanged");
    assert_eq!(HunkKind::Added.to_string(), "Added");
    assert_eq!(HunkKind::Removed.to_string(), "Removed");
    assert_eq!(HunkKind::Changed.to_string(), "Changed");
}

#[test]
fn test_stats_display() {
    let stats = DiffStats {
        added: 3,
        removed: 1,
        changed: 2,
    };
    assert_eq!(stats.to_string(), "+3 \u{2212}1 ~2");
}

#[test]
fn test_inline_highlights_keyed_by_hunk_index() {
    // The changed hunk sits after the lone removal
    let diff = compute_diff("X\nY", "A", &exact());

    assert_eq!(
        diff.inline_highlights(),
        vec![(
            1,
            InlineHighlight {
                side: HighlightSide::Removed,
                spans: vec![InlineSpan::highlighted("Y")],
            },
            InlineHighlight {
                side: HighlightSide::Added,
                spans: vec![InlineSpan::highlighted("A")],
            },
        )]
    );
}

#[test]
fn test_inline_highlights_empty_without_changed_hunks() {
    let diff = compute_diff("a\nb", "a", &exact());
    assert!(diff.inline_highlights().is_empty());
}

#[test]
fn test_right_content_reads_right_input() {
    let options = ComparisonOptions::new().ignore_case(true);
    let diff = compute_diff("Keep\nold", "KEEP\nnew", &options);

    assert_eq!(diff.hunk(0).and_then(Hunk::left_content), Some("Keep"));
    assert_eq!(diff.right_content(0), Some("KEEP"));
    assert_eq!(diff.right_content(1), Some("new"));
    assert_eq!(diff.right_content(2), None);
}
