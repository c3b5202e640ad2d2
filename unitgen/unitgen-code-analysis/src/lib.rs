//! unitgen Code Analysis - Java declaration extraction on top of tree-sitter.
//!
//! Turns Java source text into the [`ParsedClass`] model consumed by the test
//! generator: the first class or interface declaration and its public,
//! non-constructor methods in declaration order.
//!
//! # Quick Start
//!
//! ```
//! use unitgen_code_analysis::parse_class;
//!
//! # fn main() -> Result<(), unitgen_code_analysis::ParseError> {
//! let source = r#"
//! public class Calculator {
//!     public int add(int a, int b) { return a + b; }
//!     private void log() {}
//! }
//! "#;
//!
//! let class = parse_class(source)?;
//! assert_eq!(class.name, "Calculator");
//! assert_eq!(class.methods.len(), 1);
//! assert_eq!(class.methods[0].signature(), "add(int a, int b)");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//! - [`tree_sitter_wrapper`] - thin wrapper over the tree-sitter parser
//! - [`java_parser`] - Java front end producing an error-free syntax tree
//! - [`extractor`] - projection of the syntax tree onto the declaration model

pub mod error;
pub mod extractor;
pub mod java_parser;
pub mod tree_sitter_wrapper;

pub use error::ParseError;
pub use extractor::{DeclarationExtractor, NodeExtractor};
pub use java_parser::{JavaParser, JavaSyntaxTree};
pub use tree_sitter_wrapper::TreeSitterWrapper;

pub use unitgen_core::types::{MethodSignature, Parameter, ParsedClass};

/// Parse Java source and extract its first class declaration.
///
/// # Errors
///
/// Returns [`ParseError`] if the source has syntax errors or declares no
/// class or interface.
pub fn parse_class(source: &str) -> Result<ParsedClass, ParseError> {
    let mut parser = JavaParser::new()?;
    let tree = parser.parse(source)?;
    DeclarationExtractor::new().extract(&tree)
}
