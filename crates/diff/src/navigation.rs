//! Prev/next jump targets over a diff result.

use crate::diff_hunk::Hunk;

/// Direction of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Step as a signed offset (+1 / -1)
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Ordered positions of every hunk that is not unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationIndex {
    positions: Vec<usize>,
}

impl NavigationIndex {
    /// Record the 0-based index of each navigable hunk, in order
    pub fn new(hunks: &[Hunk]) -> Self {
        let positions = hunks
            .iter()
            .enumerate()
            .filter(|(_, hunk)| hunk.is_navigable())
            .map(|(index, _)| index)
            .collect();

        Self { positions }
    }

    /// Number of navigable positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Hunk indices, in display order
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Hunk index of the given navigation position
    pub fn hunk_index(&self, position: usize) -> Option<usize> {
        self.positions.get(position).copied()
    }

    /// Navigation position of a hunk index, if that hunk is navigable
    pub fn position_of(&self, hunk_index: usize) -> Option<usize> {
        self.positions.binary_search(&hunk_index).ok()
    }

    /// The position reached from `current` by one step in `direction`.
    ///
    /// Wraps past either end. With nothing selected, `Next` lands on the
    /// first position and `Previous` on the last.
    pub fn step(&self, current: Option<usize>, direction: Direction) -> Option<usize> {
        let len = self.positions.len();
        if len == 0 {
            return None;
        }

        let next = match (current, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(position), Direction::Next) => (position + 1) % len,
            (Some(position), Direction::Previous) => {
                if position == 0 || position >= len {
                    len - 1
                } else {
                    position - 1
                }
            }
        };

        Some(next)
    }
}

/// Caller-owned selection over a [`NavigationIndex`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    index: NavigationIndex,
    selected: Option<usize>,
}

impl NavigationCursor {
    pub fn new(index: NavigationIndex) -> Self {
        Self {
            index,
            selected: None,
        }
    }

    /// Currently selected navigation position
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Hunk index of the current selection
    pub fn selected_hunk(&self) -> Option<usize> {
        self.selected.and_then(|position| self.index.hunk_index(position))
    }

    /// Move one step and return the newly selected hunk index
    pub fn go(&mut self, direction: Direction) -> Option<usize> {
        self.selected = self.index.step(self.selected, direction);
        self.selected_hunk()
    }

    pub fn select_next(&mut self) -> Option<usize> {
        self.go(Direction::Next)
    }

    pub fn select_previous(&mut self) -> Option<usize> {
        self.go(Direction::Previous)
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.selected = None;
    }

    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }
}
