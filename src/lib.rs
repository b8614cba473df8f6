// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converts dotenv files into Cloud Run compatible YAML env-vars files.
//!
//! Long values such as base64 encoded service account keys break
//! `gcloud run deploy --set-env-vars`. This crate turns a `.env.local` file into
//! a YAML file suitable for `--env-vars-file` instead, leaving out keys that must
//! not be deployed.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`Entry`, `SkipSet`, quote escaping, errors)
//! - **Ports**: Trait definitions for the format seams (`EnvParser`, `EntryEmitter`)
//! - **Adapters**: The dotenv parser and the YAML env-vars emitter
//! - **Service**: The `Converter`, which wires everything together and does the file I/O
//!
//! # Format
//!
//! Input lines are `KEY=VALUE`. Blank lines, `#` comments and lines without `=`
//! are ignored. Each remaining pair becomes `KEY: 'VALUE'` with single quotes in
//! the value written as `'"'"'`.
//!
//! # Feature Flags
//!
//! - `cli`: Build the `envyaml` binary (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envyaml::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let count = convert(".env.local", "/tmp/cloudrun-env.yaml", &SkipSet::default())?;
//! println!("{} vars written", count);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::convert;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DotenvParser, YamlEnvEmitter};
    pub use crate::domain::{ConversionService, ConvertError, Entry, Rendered, Result, SkipSet};
    pub use crate::ports::{EntryEmitter, EnvParser};
    pub use crate::service::{convert, Converter, ConverterBuilder};
}
