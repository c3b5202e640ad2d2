//! Java front end.
//!
//! tree-sitter always produces a tree, recovering from errors with `ERROR`
//! and `MISSING` nodes. The Java front end only hands out trees without any
//! such node, so everything downstream can assume well-formed source.

use tree_sitter::{Node, Tree};
use tracing::debug;

use crate::error::ParseError;
use crate::extractor::find_first;
use crate::tree_sitter_wrapper::TreeSitterWrapper;

/// Parser for Java compilation units.
pub struct JavaParser {
    wrapper: TreeSitterWrapper,
}

impl JavaParser {
    /// Create a new Java parser.
    pub fn new() -> Result<Self, ParseError> {
        let wrapper = TreeSitterWrapper::java()?;
        Ok(Self { wrapper })
    }

    /// Parse Java source into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] pointing at the first error or missing
    /// node when the source is not valid Java.
    pub fn parse(&mut self, source: &str) -> Result<JavaSyntaxTree, ParseError> {
        let tree = self.wrapper.parse(source)?;

        if let Some(bad) = first_error(tree.root_node()) {
            let pos = bad.start_position();
            debug!(
                kind = bad.kind(),
                line = pos.row + 1,
                column = pos.column + 1,
                "Rejecting Java source with syntax errors"
            );
            return Err(ParseError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        Ok(JavaSyntaxTree {
            tree,
            source: source.to_string(),
        })
    }
}

/// An error-free Java syntax tree together with the text it was parsed from.
pub struct JavaSyntaxTree {
    tree: Tree,
    source: String,
}

impl JavaSyntaxTree {
    /// Root `program` node.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    find_first(root, |node| node.is_error() || node.is_missing())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_source() {
        let mut parser = JavaParser::new().unwrap();
        let tree = parser.parse("public class A {}").unwrap();
        assert_eq!(tree.root().kind(), "program");
        assert_eq!(tree.source(), "public class A {}");
    }

    #[test]
    fn test_truncated_source_reports_location() {
        let mut parser = JavaParser::new().unwrap();
        let err = parser
            .parse("public class A {\n    public int add(int a, int b) {\n")
            .err()
            .unwrap();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = JavaParser::new().unwrap();
        assert!(parser.parse("class A {").is_err());
        assert!(parser.parse("class B {}").is_ok());
    }
}
