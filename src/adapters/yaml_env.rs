// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML env-vars file emitter adapter.
//!
//! This module renders entries in the format accepted by
//! `gcloud run deploy --env-vars-file`: a flat mapping where every value is a
//! single-quoted string.

use crate::domain::Entry;
use crate::ports::EntryEmitter;

/// Emitter for flat YAML env-vars files.
///
/// Each entry becomes `key: 'value'` on its own line. Single quotes inside the
/// value are replaced by `'"'"'`. Keys are written verbatim and no other
/// character is escaped.
///
/// # Examples
///
/// ```rust
/// use envyaml::adapters::YamlEnvEmitter;
/// use envyaml::domain::Entry;
/// use envyaml::ports::EntryEmitter;
///
/// let emitter = YamlEnvEmitter::new();
/// let yaml = emitter.emit(&[Entry::new("FOO", "bar", 1), Entry::new("BAZ", "it's fine", 2)]);
/// assert_eq!(yaml, "FOO: 'bar'\nBAZ: 'it'\"'\"'s fine'\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlEnvEmitter;

impl YamlEnvEmitter {
    /// Creates a new YAML emitter.
    pub fn new() -> Self {
        YamlEnvEmitter
    }
}

impl EntryEmitter for YamlEnvEmitter {
    fn emit_entry(&self, entry: &Entry, out: &mut String) {
        out.push_str(entry.key());
        out.push_str(": '");
        out.push_str(&entry.escaped_value());
        out.push_str("'\n");
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
