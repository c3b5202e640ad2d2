//! Declaration model and generated artifact types.

use serde::{Deserialize, Serialize};

/// A parsed class together with its testable operations.
///
/// Produced once per generation request by the declaration extractor and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedClass {
    /// Simple class name as declared in source
    pub name: String,

    /// Public, non-constructor methods in declaration order
    pub methods: Vec<MethodSignature>,
}

impl ParsedClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Name of the generated test class, e.g. `CalculatorTest`.
    pub fn test_class_name(&self) -> String {
        format!("{}Test", self.name)
    }

    /// Name of the fixture field holding the subject under test.
    ///
    /// The class name with its first character lower-cased.
    pub fn instance_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Signature of a single testable method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name
    pub name: String,

    /// Return type text exactly as written
    pub return_type: String,

    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,

    /// Whether the method is declared static
    #[serde(default)]
    pub is_static: bool,

    /// Starting line number (1-indexed)
    #[serde(default)]
    pub line: usize,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            is_static: false,
            line: 0,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Human-readable signature, e.g. `add(int a, int b)`.
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.declared_type, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, params)
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// True when every parameter is a primitive or `String`.
    pub fn all_primitive_or_string(&self) -> bool {
        self.parameters.iter().all(|p| p.is_primitive_or_string)
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Type text exactly as written; for varargs this is the element type
    pub declared_type: String,

    /// Primitive type or exactly `String`
    pub is_primitive_or_string: bool,

    /// Declared with `...`
    #[serde(default)]
    pub is_varargs: bool,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        is_primitive_or_string: bool,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_primitive_or_string,
            is_varargs: false,
        }
    }

    /// Whether the parameter type is a Java primitive.
    ///
    /// `String` is the only non-primitive type flagged as primitive-or-string.
    pub fn is_primitive(&self) -> bool {
        self.is_primitive_or_string && self.declared_type != "String"
    }
}

/// Output of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    /// Name of the generated test class
    pub test_class_name: String,

    /// Complete JUnit test suite source
    pub test_suite_text: String,

    /// Per-method edge case suggestions
    pub suggestions: Vec<Suggestion>,
}

impl GeneratedArtifact {
    /// File name for the generated suite, e.g. `CalculatorTest.java`.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.test_class_name)
    }
}

/// Edge case suggestions for a single method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub target_method_name: String,
    pub method_signature: String,
    pub edge_cases: Vec<EdgeCase>,
}

impl Suggestion {
    /// Build a suggestion from a method signature.
    ///
    /// The target method name is the text before the first `(`, trimmed, or
    /// the whole signature when it has no parameter list.
    pub fn new(method_signature: impl Into<String>, edge_cases: Vec<EdgeCase>) -> Self {
        let method_signature = method_signature.into();
        let target_method_name = match method_signature.find('(') {
            Some(idx) => method_signature[..idx].trim().to_string(),
            None => method_signature.clone(),
        };
        Self {
            target_method_name,
            method_signature,
            edge_cases,
        }
    }
}

/// A single suggested edge case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCase {
    pub description: String,
    pub snippet: String,
}

impl EdgeCase {
    pub fn new(description: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            snippet: snippet.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_name_lowercases_first_char() {
        assert_eq!(ParsedClass::new("Calculator").instance_name(), "calculator");
        assert_eq!(ParsedClass::new("URLParser").instance_name(), "uRLParser");
        assert_eq!(ParsedClass::new("").instance_name(), "");
    }

    #[test]
    fn test_test_class_name() {
        assert_eq!(ParsedClass::new("Calculator").test_class_name(), "CalculatorTest");
    }

    #[test]
    fn test_signature_rendering() {
        let method = MethodSignature::new("add", "int")
            .with_parameter(Parameter::new("a", "int", true))
            .with_parameter(Parameter::new("b", "int", true));
        assert_eq!(method.signature(), "add(int a, int b)");
        assert!(method.all_primitive_or_string());
        assert!(MethodSignature::new("reset", "void").all_primitive_or_string());
    }

    #[test]
    fn test_parameter_is_primitive() {
        assert!(Parameter::new("a", "int", true).is_primitive());
        assert!(!Parameter::new("s", "String", true).is_primitive());
        assert!(!Parameter::new("w", "Widget", false).is_primitive());
    }

    #[test]
    fn test_suggestion_target_name() {
        let s = Suggestion::new("add (int a, int b)", vec![]);
        assert_eq!(s.target_method_name, "add");

        let s = Suggestion::new("reset", vec![EdgeCase::new("d", "x")]);
        assert_eq!(s.target_method_name, "reset");
        assert_eq!(s.edge_cases.len(), 1);
    }

    #[test]
    fn test_artifact_serializes_camel_case() {
        let artifact = GeneratedArtifact {
            test_class_name: "FooTest".to_string(),
            test_suite_text: "class FooTest {}".to_string(),
            suggestions: vec![],
        };
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["testSuiteText"], "class FooTest {}");
        assert_eq!(json["testClassName"], "FooTest");
        assert!(json["suggestions"].as_array().unwrap().is_empty());
        assert_eq!(artifact.file_name(), "FooTest.java");
    }
}
