// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv file parser adapter.
//!
//! This module provides a parser for the `KEY=VALUE` line format used by
//! `.env` and `.env.local` files.

use crate::domain::Entry;
use crate::ports::EnvParser;

/// Parser for `.env` style files.
///
/// Each line is trimmed, then ignored if it is empty, starts with `#`, or has
/// no `=`. Otherwise it is split on the first `=` and both halves are trimmed.
/// Quotes around values are kept as-is and no variable expansion takes place.
///
/// # Examples
///
/// ```rust
/// use envyaml::adapters::DotenvParser;
/// use envyaml::ports::EnvParser;
///
/// let parser = DotenvParser::new();
/// let entries = parser.parse("# db\nDATABASE_URL = postgres://db?a=b\nnot a pair\n");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key(), "DATABASE_URL");
/// assert_eq!(entries[0].value(), "postgres://db?a=b");
/// assert_eq!(entries[0].line(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotenvParser;

impl DotenvParser {
    /// Creates a new dotenv parser.
    pub fn new() -> Self {
        DotenvParser
    }

    /// Parses one line, returning `None` when the line holds no entry.
    fn parse_line(line: &str, line_no: usize) -> Option<Entry> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!("Ignoring line {} without '=' separator", line_no);
            return None;
        };

        Some(Entry::new(key.trim(), value.trim(), line_no))
    }
}

impl EnvParser for DotenvParser {
    fn parse(&self, content: &str) -> Vec<Entry> {
        let entries: Vec<Entry> = content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| Self::parse_line(line, i + 1))
            .collect();

        tracing::debug!("Parsed {} entries from dotenv content", entries.len());
        entries
    }

    fn format_name(&self) -> &str {
        "dotenv"
    }
}
