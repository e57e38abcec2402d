use pretty_assertions::assert_eq;
use text_diff::{compute_diff, ComparisonOptions, Direction, NavigationCursor, NavigationIndex};

const LEFT: &str = "keep\nold\nkeep 2\ndropped\nkeep 3";
const RIGHT: &str = "keep\nnew\nkeep 2\nkeep 3\nappended";

fn sample_index() -> NavigationIndex {
    compute_diff(LEFT, RIGHT, &ComparisonOptions::default()).navigation()
}

#[test]
fn test_positions_skip_unchanged_hunks() {
    let diff = compute_diff(LEFT, RIGHT, &ComparisonOptions::default());
    let index = diff.navigation();

    // keep | old~new | keep 2 | -dropped | keep 3 | +appended
    assert_eq!(index.positions(), &[1, 3, 5]);
    assert_eq!(index.len(), diff.stats().total());
    for &hunk_index in index.positions() {
        assert!(diff.hunk(hunk_index).unwrap().is_navigable());
    }
}

#[test]
fn test_no_changes_means_no_positions() {
    let diff = compute_diff("a\nb", "a\nb", &ComparisonOptions::default());
    let index = diff.navigation();

    assert!(index.is_empty());
    assert_eq!(index.step(None, Direction::Next), None);
    assert_eq!(index.step(None, Direction::Previous), None);
}

#[test]
fn test_step_from_unselected() {
    let index = sample_index();

    assert_eq!(index.step(None, Direction::Next), Some(0));
    assert_eq!(index.step(None, Direction::Previous), Some(2));
}

#[test]
fn test_step_wraps_both_ways() {
    let index = sample_index();

    assert_eq!(index.step(Some(0), Direction::Next), Some(1));
    assert_eq!(index.step(Some(2), Direction::Next), Some(0));
    assert_eq!(index.step(Some(2), Direction::Previous), Some(1));
    assert_eq!(index.step(Some(0), Direction::Previous), Some(2));
}

#[test]
fn test_next_visits_every_stop_once_then_wraps() {
    let index = sample_index();
    let mut cursor = NavigationCursor::new(index.clone());

    let visited: Vec<usize> = (0..index.len())
        .map(|_| cursor.select_next().unwrap())
        .collect();

    assert_eq!(visited, index.positions().to_vec());
    assert_eq!(cursor.select_next(), index.hunk_index(0));
}

#[test]
fn test_cursor_previous_and_reset() {
    let mut cursor = NavigationCursor::new(sample_index());

    assert_eq!(cursor.selected(), None);
    assert_eq!(cursor.select_previous(), Some(5));
    assert_eq!(cursor.selected(), Some(2));
    assert_eq!(cursor.select_previous(), Some(3));

    cursor.reset();
    assert_eq!(cursor.selected_hunk(), None);
    assert_eq!(cursor.select_next(), Some(1));
}

#[test]
fn test_position_lookup() {
    let index = sample_index();

    assert_eq!(index.hunk_index(1), Some(3));
    assert_eq!(index.hunk_index(3), None);
    assert_eq!(index.position_of(5), Some(2));
    assert_eq!(index.position_of(0), None);
}

#[test]
fn test_direction_offset() {
    assert_eq!(Direction::Next.offset(), 1);
    assert_eq!(Direction::Previous.offset(), -1);
}
