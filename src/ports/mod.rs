// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the two format seams of
//! a conversion: reading environment files and rendering output. These traits
//! are implemented by adapters in the adapters layer.

pub mod emitter;
pub mod parser;

// Re-export commonly used types
pub use emitter::EntryEmitter;
pub use parser::EnvParser;
