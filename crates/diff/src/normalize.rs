use std::borrow::Cow;

use crate::options::ComparisonOptions;

/// Build the key a line is compared by under `options`.
///
/// The key never leaves the aligner; hunks keep the original text.
pub fn comparison_key<'a>(line: &'a str, options: &ComparisonOptions) -> Cow<'a, str> {
    let mut key = Cow::Borrowed(line);

    if options.ignore_case {
        key = Cow::Owned(key.to_lowercase());
    }

    if options.ignore_whitespace {
        key = Cow::Owned(collapse_whitespace(&key));
    }

    key
}

/// Collapse every whitespace run to a single space, dropping leading and
/// trailing runs.
fn collapse_whitespace(line: &str) -> String {
    let mut collapsed = String::with_capacity(line.len());

    for word in line.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }

    collapsed
}
