// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the conversion service implementation.
//!
//! This module contains the concrete implementation of the `ConversionService`
//! trait and the `convert` entry point built on it.

pub mod converter;

// Re-export commonly used types
pub use converter::{convert, Converter, ConverterBuilder};
