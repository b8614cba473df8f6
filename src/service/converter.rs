// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default conversion service implementation.
//!
//! This module provides the `Converter`, which wires a parser, an emitter and a
//! skip set together and owns the file I/O of a conversion.

use crate::adapters::{DotenvParser, YamlEnvEmitter};
use crate::domain::{ConversionService, ConvertError, Entry, Rendered, Result, SkipSet};
use crate::ports::{EntryEmitter, EnvParser};
use std::fs;
use std::path::Path;

/// Converts dotenv content into a YAML env-vars document.
///
/// By default the converter reads the dotenv format, writes the YAML env-vars
/// format and drops the keys in `SkipSet::default()`.
///
/// # Examples
///
/// ```rust
/// use envyaml::domain::ConversionService;
/// use envyaml::service::Converter;
///
/// let converter = Converter::new();
/// let rendered = converter.render(
///     "FOO=bar\nNEXTAUTH_URL=https://example.com\n# comment\nBAZ=it's fine\n",
/// );
/// assert_eq!(rendered.output, "FOO: 'bar'\nBAZ: 'it'\"'\"'s fine'\n");
/// assert_eq!(rendered.count(), 2);
/// assert_eq!(rendered.skipped, vec!["NEXTAUTH_URL".to_string()]);
/// ```
pub struct Converter {
    parser: Box<dyn EnvParser>,
    emitter: Box<dyn EntryEmitter>,
    skip_set: SkipSet,
}

impl Converter {
    /// Creates a converter with the dotenv parser, YAML emitter and default skip set.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a converter that uses the given skip set.
    pub fn with_skip_set(skip_set: SkipSet) -> Self {
        Self::builder().with_skip_set(skip_set).build()
    }

    /// Creates a new builder for constructing a converter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envyaml::domain::SkipSet;
    /// use envyaml::service::Converter;
    ///
    /// let converter = Converter::builder()
    ///     .with_skip_set(SkipSet::from_keys(["SECRET"]))
    ///     .build();
    /// assert!(converter.skip_set().contains("SECRET"));
    /// ```
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Returns the skip set in use.
    pub fn skip_set(&self) -> &SkipSet {
        &self.skip_set
    }

    /// Splits parsed entries into those that are kept and the skipped keys.
    fn filter(&self, entries: Vec<Entry>) -> (Vec<Entry>, Vec<String>) {
        let mut kept = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            if self.skip_set.contains(entry.key()) {
                tracing::debug!("Skipping '{}' on line {}", entry.key(), entry.line());
                skipped.push(entry.key().to_string());
            } else {
                kept.push(entry);
            }
        }

        (kept, skipped)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionService for Converter {
    fn render(&self, content: &str) -> Rendered {
        let entries = self.parser.parse(content);
        let (kept, skipped) = self.filter(entries);
        let output = self.emitter.emit(&kept);

        Rendered {
            output,
            kept,
            skipped,
        }
    }

    fn convert_file(&self, source: &Path, dest: &Path) -> Result<usize> {
        let content =
            fs::read_to_string(source).map_err(|e| ConvertError::from_read_error(source, e))?;

        let rendered = self.render(&content);
        tracing::debug!(
            "Read {} {} entries from {} ({} skipped)",
            rendered.count() + rendered.skipped.len(),
            self.parser.format_name(),
            source.display(),
            rendered.skipped.len()
        );

        fs::write(dest, rendered.output.as_bytes())
            .map_err(|e| ConvertError::from_write_error(dest, e))?;

        tracing::info!("Wrote {} entries to {}", rendered.count(), dest.display());
        Ok(rendered.count())
    }
}

/// Builder for constructing a [`Converter`].
///
/// # Examples
///
/// ```rust
/// use envyaml::adapters::{DotenvParser, YamlEnvEmitter};
/// use envyaml::domain::SkipSet;
/// use envyaml::service::ConverterBuilder;
///
/// let converter = ConverterBuilder::new()
///     .with_parser(Box::new(DotenvParser::new()))
///     .with_emitter(Box::new(YamlEnvEmitter::new()))
///     .with_skip_set(SkipSet::empty())
///     .build();
/// assert!(converter.skip_set().is_empty());
/// ```
pub struct ConverterBuilder {
    parser: Box<dyn EnvParser>,
    emitter: Box<dyn EntryEmitter>,
    skip_set: SkipSet,
}

impl ConverterBuilder {
    /// Creates a new builder with the default parser, emitter and skip set.
    pub fn new() -> Self {
        Self {
            parser: Box::new(DotenvParser::new()),
            emitter: Box::new(YamlEnvEmitter::new()),
            skip_set: SkipSet::default(),
        }
    }

    /// Replaces the input parser.
    pub fn with_parser(mut self, parser: Box<dyn EnvParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the output emitter.
    pub fn with_emitter(mut self, emitter: Box<dyn EntryEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Replaces the skip set.
    pub fn with_skip_set(mut self, skip_set: SkipSet) -> Self {
        self.skip_set = skip_set;
        self
    }

    /// Builds the converter.
    pub fn build(self) -> Converter {
        Converter {
            parser: self.parser,
            emitter: self.emitter,
            skip_set: self.skip_set,
        }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts the dotenv file at `source` into a YAML env-vars file at `dest`.
///
/// Keys in `skip_set` are dropped. `dest` is overwritten. Returns the number
/// of entries written.
///
/// # Errors
///
/// * [`ConvertError::SourceNotFound`] if `source` does not exist
/// * [`ConvertError::SourceRead`] if `source` cannot be read
/// * [`ConvertError::DestinationWrite`] if `dest` cannot be written
///
/// # Examples
///
/// ```rust,no_run
/// use envyaml::domain::SkipSet;
///
/// # fn main() -> envyaml::domain::Result<()> {
/// let count = envyaml::convert(".env.local", "/tmp/env.yaml", &SkipSet::default())?;
/// println!("{} vars written", count);
/// # Ok(())
/// # }
/// ```
pub fn convert(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    skip_set: &SkipSet,
) -> Result<usize> {
    Converter::with_skip_set(skip_set.clone()).convert_file(source.as_ref(), dest.as_ref())
}
