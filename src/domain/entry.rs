// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single `KEY=VALUE` pair read from an environment file.

use std::borrow::Cow;
use std::fmt;

/// The sequence a single quote is replaced with inside a single-quoted scalar.
pub const ESCAPED_SINGLE_QUOTE: &str = "'\"'\"'";

/// One parsed key/value pair destined for output.
///
/// Both `key` and `value` are already trimmed of surrounding whitespace. The
/// `line` field holds the 1-based line number in the source file and is only
/// used for diagnostics.
///
/// # Examples
///
/// ```
/// use envyaml::domain::Entry;
///
/// let entry = Entry::new("NAME", "O'Brien", 3);
/// assert_eq!(entry.key(), "NAME");
/// assert_eq!(entry.escaped_value(), "O'\"'\"'Brien");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
    line: usize,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }

    /// Returns the variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw, unescaped value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the 1-based source line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the value with every single quote escaped.
    pub fn escaped_value(&self) -> Cow<'_, str> {
        escape_single_quotes(&self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Replaces each `'` with `'"'"'`.
///
/// The value is borrowed unchanged when it contains no single quote.
///
/// # Examples
///
/// ```
/// use envyaml::domain::escape_single_quotes;
///
/// assert_eq!(escape_single_quotes("it's fine"), "it'\"'\"'s fine");
/// assert_eq!(escape_single_quotes("plain"), "plain");
/// ```
pub fn escape_single_quotes(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', ESCAPED_SINGLE_QUOTE))
    } else {
        Cow::Borrowed(value)
    }
}
