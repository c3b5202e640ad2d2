//! Parse failures of the Java front end.

use unitgen_core::UnitgenError;

/// Reasons the source text could not be turned into a [`ParsedClass`].
///
/// [`ParsedClass`]: unitgen_core::ParsedClass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The Java grammar could not be loaded into the parser
    #[error("Failed to set parser language: {0}")]
    Language(String),

    /// tree-sitter returned no tree at all
    #[error("Failed to parse source code")]
    NoTree,

    /// The tree contains an error or missing node
    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// The source parsed but declares no class or interface
    #[error("No class found in source code.")]
    NoClassFound,
}

impl From<ParseError> for UnitgenError {
    fn from(err: ParseError) -> Self {
        UnitgenError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParseError::Syntax { line: 3, column: 7 };
        assert_eq!(err.to_string(), "Syntax error at line 3, column 7");
    }

    #[test]
    fn test_into_unitgen_error() {
        let err: UnitgenError = ParseError::NoClassFound.into();
        assert!(err.is_parse());
    }
}
