//! Test synthesizer.
//!
//! Turns one [`MethodSignature`] into its generated test cases:
//!
//! 1. a happy-path test, always
//! 2. nothing more for methods without parameters
//! 3. a parameterized boundary test when every parameter is primitive or `String`
//! 4. a null/edge-case test otherwise
//!
//! Cases carry statements and data rows only; indentation, annotations and
//! braces are the assembler's concern.

use serde::{Deserialize, Serialize};
use unitgen_core::types::{MethodSignature, Parameter};

use crate::assertion::Assertion;
use crate::heuristics::{NULL_LITERAL, ValueCategory, value_for};

/// Kind of generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    HappyPath,
    Boundaries,
    NullInputs,
}

impl TestKind {
    /// Suffix appended to `test<Method>` in the test identifier.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::HappyPath => "_HappyPath",
            Self::Boundaries => "_Boundaries",
            Self::NullInputs => "_NullInputs_ShouldThrowException",
        }
    }
}

/// Which extra test a method receives next to its happy path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestShape {
    /// No parameters
    HappyPathOnly,
    /// All parameters primitive or `String`
    Boundaries,
    /// At least one reference parameter
    NullInputs,
}

impl TestShape {
    pub fn for_method(method: &MethodSignature) -> Self {
        if !method.has_parameters() {
            Self::HappyPathOnly
        } else if method.all_primitive_or_string() {
            Self::Boundaries
        } else {
            Self::NullInputs
        }
    }
}

/// One `@CsvSource` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub category: ValueCategory,
    /// Literals in parameter order, as they would appear in a call
    pub values: Vec<&'static str>,
}

impl CsvRow {
    fn build(parameters: &[Parameter], category: ValueCategory) -> Self {
        Self {
            category,
            values: parameters
                .iter()
                .map(|p| value_for(&p.declared_type, category))
                .collect(),
        }
    }

    /// Row text for the CSV source: literals joined by `, ` with double
    /// quotes removed.
    pub fn csv(&self) -> String {
        self.values
            .iter()
            .map(|v| v.replace('"', ""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of a generated test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestBody {
    /// Single assertion statement
    Statement(String),
    /// Parameterized statement driven by data rows
    Parameterized {
        rows: Vec<CsvRow>,
        parameters: Vec<Parameter>,
        statement: String,
    },
    /// Call expected to throw
    ExpectThrows { call: String },
}

/// A single generated test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub kind: TestKind,
    /// Test method identifier, e.g. `testAdd_HappyPath`
    pub name: String,
    /// Name of the method under test
    pub target: String,
    pub body: TestBody,
}

/// Synthesizes test cases against a fixture field.
#[derive(Debug, Clone)]
pub struct TestSynthesizer {
    instance: String,
}

impl TestSynthesizer {
    /// `instance` is the fixture field the generated calls go through.
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// All test cases for a method, happy path first.
    pub fn synthesize(&self, method: &MethodSignature) -> Vec<TestCase> {
        let mut cases = vec![self.happy_path(method)];

        match TestShape::for_method(method) {
            TestShape::HappyPathOnly => {}
            TestShape::Boundaries => cases.push(self.boundaries(method)),
            TestShape::NullInputs => cases.push(self.null_inputs(method)),
        }

        cases
    }

    fn happy_path(&self, method: &MethodSignature) -> TestCase {
        let args: Vec<&str> = method
            .parameters
            .iter()
            .map(|p| value_for(&p.declared_type, ValueCategory::Positive))
            .collect();

        let call = self.call(method, &args);
        TestCase {
            kind: TestKind::HappyPath,
            name: test_name(method, TestKind::HappyPath),
            target: method.name.clone(),
            body: TestBody::Statement(
                Assertion::for_return_type(&method.return_type).statement(&call),
            ),
        }
    }

    fn boundaries(&self, method: &MethodSignature) -> TestCase {
        let rows = ValueCategory::ALL
            .iter()
            .map(|&category| CsvRow::build(&method.parameters, category))
            .collect();

        let args: Vec<&str> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        let call = self.call(method, &args);

        TestCase {
            kind: TestKind::Boundaries,
            name: test_name(method, TestKind::Boundaries),
            target: method.name.clone(),
            body: TestBody::Parameterized {
                rows,
                parameters: method.parameters.clone(),
                statement: Assertion::for_return_type(&method.return_type).statement(&call),
            },
        }
    }

    fn null_inputs(&self, method: &MethodSignature) -> TestCase {
        let args: Vec<&str> = method
            .parameters
            .iter()
            .map(|p| {
                if p.is_primitive() {
                    value_for(&p.declared_type, ValueCategory::Zero)
                } else {
                    NULL_LITERAL
                }
            })
            .collect();

        TestCase {
            kind: TestKind::NullInputs,
            name: test_name(method, TestKind::NullInputs),
            target: method.name.clone(),
            body: TestBody::ExpectThrows {
                call: self.call(method, &args),
            },
        }
    }

    fn call(&self, method: &MethodSignature, args: &[&str]) -> String {
        format!("{}.{}({})", self.instance, method.name, args.join(", "))
    }
}

/// `test<Capitalized>` plus the kind's suffix.
pub fn test_name(method: &MethodSignature, kind: TestKind) -> String {
    format!("test{}{}", capitalize(&method.name), kind.suffix())
}

/// Upper-case the first ASCII character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
