// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the entry and skip set types, the escaping rule and the
//! error type. It is independent of file formats and of the filesystem.

pub mod entry;
pub mod errors;
pub mod service;
pub mod skip_set;

// Re-export commonly used types
pub use entry::{escape_single_quotes, Entry, ESCAPED_SINGLE_QUOTE};
pub use errors::{ConvertError, Result};
pub use service::{ConversionService, Rendered};
pub use skip_set::{SkipSet, DEFAULT_SKIPPED_KEYS};
