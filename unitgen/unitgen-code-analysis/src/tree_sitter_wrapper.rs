//! Generic tree-sitter wrapper for parsing source code.

use tree_sitter::{Language, Parser, Tree};

use crate::error::ParseError;

/// Generic wrapper around tree-sitter parser.
pub struct TreeSitterWrapper {
    parser: Parser,
}

impl TreeSitterWrapper {
    /// Create a new parser for the given language.
    pub fn new(language: Language) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        Ok(Self { parser })
    }

    /// Create a parser for Java sources.
    pub fn java() -> Result<Self, ParseError> {
        Self::new(tree_sitter_java::LANGUAGE.into())
    }

    /// Parse source code and return the syntax tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser.parse(source, None).ok_or(ParseError::NoTree)
    }
}
