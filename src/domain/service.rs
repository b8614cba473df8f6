// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion service trait definition.
//!
//! This module defines the `ConversionService` trait, the main interface for turning
//! environment file content into deployment YAML, and the `Rendered` result it produces.

use crate::domain::{Entry, Result};
use std::path::Path;

/// The outcome of converting environment file content in memory.
///
/// `kept` holds the entries that were written, in encounter order. `skipped`
/// holds the keys that were dropped because they are in the skip set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    /// The full YAML output text
    pub output: String,
    /// Entries written to the output, in source order
    pub kept: Vec<Entry>,
    /// Keys discarded by the skip set, in source order
    pub skipped: Vec<String>,
}

impl Rendered {
    /// Returns the number of entries written.
    pub fn count(&self) -> usize {
        self.kept.len()
    }
}

/// The main conversion service trait.
///
/// # Examples
///
/// ```rust
/// use envyaml::domain::{ConversionService, Rendered, Result};
/// use std::path::Path;
///
/// struct EchoService;
///
/// impl ConversionService for EchoService {
///     fn render(&self, content: &str) -> Rendered {
///         Rendered {
///             output: content.to_string(),
///             ..Rendered::default()
///         }
///     }
///
///     fn convert_file(&self, _source: &Path, _dest: &Path) -> Result<usize> {
///         Ok(0)
///     }
/// }
///
/// let rendered = EchoService.render("FOO: 'bar'\n");
/// assert_eq!(rendered.output, "FOO: 'bar'\n");
/// assert_eq!(rendered.count(), 0);
/// ```
pub trait ConversionService {
    /// Converts environment file content to YAML without touching the filesystem.
    fn render(&self, content: &str) -> Rendered;

    /// Reads `source`, converts it and overwrites `dest` with the result.
    ///
    /// The source file is fully read and closed before `dest` is opened.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of entries written
    /// * `Err(ConvertError)` - The source could not be read or `dest` could not be written
    fn convert_file(&self, source: &Path, dest: &Path) -> Result<usize>;
}
