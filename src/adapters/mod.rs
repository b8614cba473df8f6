// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: a parser for dotenv files and an emitter for YAML env-vars files.

pub mod dotenv;
pub mod yaml_env;

pub use dotenv::DotenvParser;
pub use yaml_env::YamlEnvEmitter;
