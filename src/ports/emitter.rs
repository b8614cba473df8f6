// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output emitter trait definition.
//!
//! This module defines the `EntryEmitter` trait, which renders filtered entries
//! into the text of the deployment file.

use crate::domain::Entry;

/// A trait for rendering entries into an output document.
///
/// The rendered text must contain exactly one line per entry, in the order given,
/// so that the number of entries equals the number of lines written.
///
/// # Examples
///
/// ```rust
/// use envyaml::domain::Entry;
/// use envyaml::ports::EntryEmitter;
///
/// struct ShellEmitter;
///
/// impl EntryEmitter for ShellEmitter {
///     fn emit_entry(&self, entry: &Entry, out: &mut String) {
///         out.push_str(&format!("export {}={}\n", entry.key(), entry.value()));
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["sh"]
///     }
/// }
///
/// let text = ShellEmitter.emit(&[Entry::new("A", "1", 1)]);
/// assert_eq!(text, "export A=1\n");
/// ```
pub trait EntryEmitter {
    /// Appends the line for a single entry, including its line terminator.
    fn emit_entry(&self, entry: &Entry, out: &mut String);

    /// Renders all entries into one document.
    fn emit(&self, entries: &[Entry]) -> String {
        let mut out = String::new();
        for entry in entries {
            self.emit_entry(entry, &mut out);
        }
        out
    }

    /// Returns the file extensions (without the leading dot) the output is usually saved with.
    fn supported_extensions(&self) -> &[&str];
}
