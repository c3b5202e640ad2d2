//! Library for unitgen CLI commands and terminal output.

pub mod commands;
pub mod output;

pub use commands::*;
