//! Test generator - turns Java source into a JUnit test suite artifact.
//!
//! Wires the pipeline: parse, extract the first class, synthesize cases per
//! method, assemble the suite and attach suggestions. Every parse failure is
//! reported as one user-facing [`GenerateError::InvalidSyntax`] with the
//! underlying [`ParseError`] kept as its source.

use tracing::info;
use unitgen_code_analysis::{DeclarationExtractor, JavaParser, ParseError};
use unitgen_core::types::{GeneratedArtifact, ParsedClass};

use crate::assembler::{TestSuite, TestSuiteBuilder};
use crate::suggestions::generate_suggestions;
use crate::synthesizer::{TestKind, TestSynthesizer};

/// Failures of a generation request.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid Java syntax. Could not parse the source code.")]
    InvalidSyntax(#[source] ParseError),
}

impl GenerateError {
    /// The parse failure behind this error.
    pub fn parse_error(&self) -> &ParseError {
        match self {
            Self::InvalidSyntax(err) => err,
        }
    }
}

impl From<ParseError> for GenerateError {
    fn from(err: ParseError) -> Self {
        Self::InvalidSyntax(err)
    }
}

/// Stateless JUnit test generator.
///
/// Each call owns its own parser, so one generator can be shared across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestGenerator;

impl TestGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a test suite artifact for Java source text.
    pub fn generate(&self, source: &str) -> Result<GeneratedArtifact, GenerateError> {
        let mut parser = JavaParser::new()?;
        let tree = parser.parse(source)?;
        let class = DeclarationExtractor::new().extract(&tree)?;
        Ok(self.generate_for_class(&class))
    }

    /// Generate the artifact for an already extracted class.
    pub fn generate_for_class(&self, class: &ParsedClass) -> GeneratedArtifact {
        let suite = self.build_suite(class);
        info!(
            class = %class.name,
            methods = class.methods.len(),
            tests = suite.cases().len(),
            boundaries = suite.count(TestKind::Boundaries),
            null_inputs = suite.count(TestKind::NullInputs),
            "Generated test suite"
        );

        GeneratedArtifact {
            test_class_name: suite.test_class_name().to_string(),
            test_suite_text: suite.render(),
            suggestions: generate_suggestions(class),
        }
    }

    /// Build the suite fragments without rendering them.
    pub fn build_suite(&self, class: &ParsedClass) -> TestSuite {
        let synthesizer = TestSynthesizer::new(class.instance_name());
        class
            .methods
            .iter()
            .fold(TestSuiteBuilder::new(class), |builder, method| {
                builder.cases(synthesizer.synthesize(method))
            })
            .build()
    }
}

/// Generate a test suite artifact with a default [`TestGenerator`].
pub fn generate(source: &str) -> Result<GeneratedArtifact, GenerateError> {
    TestGenerator::new().generate(source)
}
