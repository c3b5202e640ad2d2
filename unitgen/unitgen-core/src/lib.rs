//! Core types and abstractions for the unitgen test synthesis engine.
//!
//! This crate provides the declaration model shared by the parser front end and
//! the code generator, the generated artifact types, configuration, and error
//! handling used across all unitgen components.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GeneralConfig, OutputConfig, OutputFormat, UnitgenConfig};
pub use error::{Result, UnitgenError};
pub use types::*;
