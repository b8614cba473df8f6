// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment file parser trait definition.
//!
//! This module defines the `EnvParser` trait, which provides an interface for
//! turning the text of an environment file into an ordered list of entries.

use crate::domain::Entry;

/// A trait for parsing environment files.
///
/// Implementations must preserve the order in which entries appear in the
/// content and must not deduplicate keys: a key defined twice yields two entries.
///
/// # Examples
///
/// ```rust
/// use envyaml::domain::Entry;
/// use envyaml::ports::EnvParser;
///
/// struct ColonParser;
///
/// impl EnvParser for ColonParser {
///     fn parse(&self, content: &str) -> Vec<Entry> {
///         content
///             .lines()
///             .enumerate()
///             .filter_map(|(i, line)| {
///                 line.split_once(':').map(|(k, v)| Entry::new(k.trim(), v.trim(), i + 1))
///             })
///             .collect()
///     }
///
///     fn format_name(&self) -> &str {
///         "colon"
///     }
/// }
///
/// let entries = ColonParser.parse("A: 1\nB: 2");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].key(), "B");
/// ```
pub trait EnvParser {
    /// Parses content into entries, in source order.
    ///
    /// Lines that do not describe an entry are ignored rather than reported.
    fn parse(&self, content: &str) -> Vec<Entry>;

    /// Returns a short name for the input format, used in log messages.
    fn format_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test implementation of EnvParser for testing purposes
    struct FixedParser;

    impl EnvParser for FixedParser {
        fn parse(&self, _content: &str) -> Vec<Entry> {
            vec![Entry::new("KEY", "first", 1), Entry::new("KEY", "second", 2)]
        }

        fn format_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_parser_keeps_duplicates_in_order() {
        let entries = FixedParser.parse("ignored");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value(), "first");
        assert_eq!(entries[1].value(), "second");
    }

    #[test]
    fn test_parser_format_name() {
        assert_eq!(FixedParser.format_name(), "fixed");
    }
}
