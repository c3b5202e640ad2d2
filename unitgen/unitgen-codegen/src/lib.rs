//! unitgen Codegen - heuristic JUnit 5 test synthesis.
//!
//! Given a parsed Java class, produces a test class with one happy-path test
//! per public method, plus either a parameterized boundary test (all
//! parameters primitive or `String`) or a null-input test expecting
//! `IllegalArgumentException`.
//!
//! ```
//! let artifact = unitgen_codegen::generate(
//!     "class Greeter { public String greet(String name) { return name; } }",
//! )
//! .unwrap();
//!
//! assert_eq!(artifact.test_class_name, "GreeterTest");
//! assert!(artifact.test_suite_text.contains("void testGreet_HappyPath()"));
//! assert!(artifact.test_suite_text.contains("void testGreet_Boundaries(String name)"));
//! ```

pub mod assembler;
pub mod assertion;
pub mod generator;
pub mod heuristics;
pub mod suggestions;
pub mod synthesizer;

pub use assembler::{Fixture, JUNIT_IMPORTS, TestSuite, TestSuiteBuilder};
pub use assertion::{Assertion, assertion_for};
pub use generator::{GenerateError, TestGenerator, generate};
pub use heuristics::{NULL_LITERAL, TypeBucket, ValueCategory, value_for};
pub use suggestions::generate_suggestions;
pub use synthesizer::{CsvRow, TestBody, TestCase, TestKind, TestShape, TestSynthesizer};

pub use unitgen_core::types::{EdgeCase, GeneratedArtifact, Suggestion};
