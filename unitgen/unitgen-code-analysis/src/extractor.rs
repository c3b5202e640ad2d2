//! Declaration extraction.
//!
//! Projects a Java syntax tree onto the declaration model: the first class or
//! interface declaration in pre-order and its testable methods. A method is
//! testable when it carries an explicit `public` modifier and is not a
//! constructor. Methods keep their source order.

use tracing::debug;
use tree_sitter::Node;
use unitgen_core::types::{MethodSignature, Parameter, ParsedClass};

use crate::error::ParseError;
use crate::java_parser::JavaSyntaxTree;

/// Node kinds that count as a type declaration.
const TYPE_DECLARATION_KINDS: [&str; 2] = ["class_declaration", "interface_declaration"];

/// Grammar nodes for Java primitive types (excluding `void`).
const PRIMITIVE_TYPE_KINDS: [&str; 3] = ["integral_type", "floating_point_type", "boolean_type"];

/// Convenience accessors over tree-sitter nodes.
pub trait NodeExtractor {
    /// Source text covered by the node.
    fn text<'s>(&self, source: &'s str) -> &'s str;

    /// Starting line number (1-indexed).
    fn start_line(&self) -> usize;

    /// Whether the node's `modifiers` child contains the given keyword.
    fn has_modifier(&self, keyword: &str) -> bool;
}

impl NodeExtractor for Node<'_> {
    fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.byte_range()).unwrap_or("")
    }

    fn start_line(&self) -> usize {
        self.start_position().row + 1
    }

    fn has_modifier(&self, keyword: &str) -> bool {
        let mut cursor = self.walk();
        self.children(&mut cursor)
            .filter(|child| child.kind() == "modifiers")
            .any(|modifiers| {
                let mut inner = modifiers.walk();
                modifiers
                    .children(&mut inner)
                    .any(|m| m.kind() == keyword)
            })
    }
}

/// Find the first node in pre-order matching `pred`.
///
/// Iterative walk with a tree cursor; the root itself is tested first.
pub fn find_first<'tree, F>(root: Node<'tree>, mut pred: F) -> Option<Node<'tree>>
where
    F: FnMut(&Node<'tree>) -> bool,
{
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if pred(&node) {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Extracts the [`ParsedClass`] from a Java syntax tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationExtractor;

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the first class or interface and its testable methods.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoClassFound`] when the tree holds no class or
    /// interface declaration.
    pub fn extract(&self, tree: &JavaSyntaxTree) -> Result<ParsedClass, ParseError> {
        let source = tree.source();
        let declaration = find_first(tree.root(), |node| {
            TYPE_DECLARATION_KINDS.contains(&node.kind())
        })
        .ok_or(ParseError::NoClassFound)?;

        let name = declaration
            .child_by_field_name("name")
            .map(|n| n.text(source).to_string())
            .ok_or(ParseError::NoClassFound)?;

        let mut class = ParsedClass::new(name);

        if let Some(body) = declaration.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.named_children(&mut cursor) {
                if member.kind() != "method_declaration" {
                    continue;
                }
                if !member.has_modifier("public") {
                    continue;
                }
                if let Some(method) = self.extract_method(member, source) {
                    class.methods.push(method);
                }
            }
        }

        debug!(
            class = %class.name,
            methods = class.methods.len(),
            "Extracted class declaration"
        );

        Ok(class)
    }

    /// Extract a single method signature.
    fn extract_method(&self, node: Node, source: &str) -> Option<MethodSignature> {
        let name = node.child_by_field_name("name")?.text(source).to_string();
        let mut return_type = node.child_by_field_name("type")?.text(source).to_string();

        // `int values()[]` returns an array of int
        if let Some(dims) = node.child_by_field_name("dimensions") {
            return_type.push_str(dims.text(source));
        }

        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| self.extract_parameters(params, source))
            .unwrap_or_default();

        let method = MethodSignature {
            name,
            return_type,
            parameters,
            is_static: node.has_modifier("static"),
            line: node.start_line(),
        };
        debug!(
            method = %method.signature(),
            return_type = %method.return_type,
            line = method.line,
            is_static = method.is_static,
            "Extracted method"
        );
        Some(method)
    }

    /// Extract parameters from a `formal_parameters` node, skipping any
    /// receiver parameter.
    fn extract_parameters(&self, node: Node, source: &str) -> Vec<Parameter> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter_map(|child| match child.kind() {
                "formal_parameter" => self.extract_formal_parameter(child, source),
                "spread_parameter" => self.extract_spread_parameter(child, source),
                _ => None,
            })
            .collect()
    }

    fn extract_formal_parameter(&self, node: Node, source: &str) -> Option<Parameter> {
        let type_node = node.child_by_field_name("type")?;
        let name = node.child_by_field_name("name")?.text(source).to_string();

        // `int values[]` declares an array of int
        match node.child_by_field_name("dimensions") {
            Some(dims) => Some(Parameter::new(
                name,
                format!("{}{}", type_node.text(source), dims.text(source)),
                false,
            )),
            None => Some(Parameter::new(
                name,
                type_node.text(source),
                is_primitive_or_string(type_node, source),
            )),
        }
    }

    fn extract_spread_parameter(&self, node: Node, source: &str) -> Option<Parameter> {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();

        let type_node = children
            .iter()
            .find(|c| c.kind() != "modifiers" && c.kind() != "variable_declarator")?;
        let declarator = children.iter().find(|c| c.kind() == "variable_declarator")?;
        let name = declarator.child_by_field_name("name")?.text(source).to_string();

        let mut parameter = Parameter::new(
            name,
            type_node.text(source),
            is_primitive_or_string(*type_node, source),
        );
        parameter.is_varargs = true;
        Some(parameter)
    }
}

fn is_primitive_or_string(type_node: Node, source: &str) -> bool {
    PRIMITIVE_TYPE_KINDS.contains(&type_node.kind()) || type_node.text(source) == "String"
}
