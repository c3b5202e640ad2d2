//! Output formatting utilities for the unitgen CLI.
//!
//! Generated suites go to stdout; every status line goes to stderr so the two
//! never mix when stdout is piped into a file.

use console::style;
use std::fmt::Display;

/// Print a success message
pub fn success(msg: impl Display) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: impl Display) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: impl Display) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print a section header
pub fn header(msg: impl Display) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: impl Display, value: impl Display) {
    println!("  {}: {}", style(key).cyan(), value);
}
