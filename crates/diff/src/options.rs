//! Comparison options for a diff run.
//!
//! Options only influence how lines are compared. The text that ends up in
//! hunks is always the original line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flags controlling line equality during alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComparisonOptions {
    /// Collapse runs of whitespace to one space and trim both ends.
    pub ignore_whitespace: bool,

    /// Compare lines case-insensitively.
    pub ignore_case: bool,
}

impl ComparisonOptions {
    /// Create options with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable whitespace-insensitive comparison.
    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Enable or disable case-insensitive comparison.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// True when no flag alters the comparison key.
    pub fn is_exact(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }
}
