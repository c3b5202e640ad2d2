//! Output assembler.
//!
//! Collects the fragments of a JUnit 5 test class (imports, fixture, test
//! cases) in order and renders them once through [`std::fmt::Display`].

use std::fmt;

use unitgen_core::types::ParsedClass;

use crate::assertion::{EXPECTED_EXCEPTION, NULL_INPUTS_MESSAGE};
use crate::synthesizer::{TestBody, TestCase, TestKind};

/// Imports every generated suite starts with.
pub const JUNIT_IMPORTS: [&str; 5] = [
    "import org.junit.jupiter.api.BeforeEach;",
    "import org.junit.jupiter.api.Test;",
    "import org.junit.jupiter.params.ParameterizedTest;",
    "import org.junit.jupiter.params.provider.CsvSource;",
    "import static org.junit.jupiter.api.Assertions.*;",
];

const INDENT: &str = "    ";

/// Field plus `@BeforeEach` block creating the subject with its default
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub class_name: String,
    pub instance_name: String,
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}private {} {};", self.class_name, self.instance_name)?;
        writeln!(f)?;
        writeln!(f, "{INDENT}@BeforeEach")?;
        writeln!(f, "{INDENT}void setUp() {{")?;
        writeln!(
            f,
            "{INDENT}{INDENT}{} = new {}();",
            self.instance_name, self.class_name
        )?;
        writeln!(f, "{INDENT}}}")?;
        writeln!(f)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            TestBody::Statement(statement) => {
                writeln!(f, "{INDENT}@Test")?;
                writeln!(f, "{INDENT}void {}() {{", self.name)?;
                writeln!(f, "{INDENT}{INDENT}{}", statement)?;
            }
            TestBody::Parameterized {
                rows,
                parameters,
                statement,
            } => {
                writeln!(
                    f,
                    "{INDENT}@ParameterizedTest(name = \"Testing boundaries with inputs: {{arguments}}\")"
                )?;
                writeln!(f, "{INDENT}@CsvSource({{")?;
                for (idx, row) in rows.iter().enumerate() {
                    let separator = if idx + 1 == rows.len() { " " } else { "," };
                    writeln!(
                        f,
                        "{INDENT}{INDENT}\"{}\"{} // {}",
                        row.csv(),
                        separator,
                        row.category.row_label()
                    )?;
                }
                writeln!(f, "{INDENT}}})")?;

                let signature = parameters
                    .iter()
                    .map(|p| format!("{} {}", p.declared_type, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "{INDENT}void {}({}) {{", self.name, signature)?;
                writeln!(
                    f,
                    "{INDENT}{INDENT}// TODO: Update expected assertion based on your business logic"
                )?;
                writeln!(f, "{INDENT}{INDENT}{}", statement)?;
            }
            TestBody::ExpectThrows { call } => {
                writeln!(f, "{INDENT}@Test")?;
                writeln!(f, "{INDENT}void {}() {{", self.name)?;
                writeln!(
                    f,
                    "{INDENT}{INDENT}assertThrows({}.class, () -> {{",
                    EXPECTED_EXCEPTION
                )?;
                writeln!(f, "{INDENT}{INDENT}{INDENT}{};", call)?;
                writeln!(f, "{INDENT}{INDENT}}}, \"{}\");", NULL_INPUTS_MESSAGE)?;
            }
        }
        writeln!(f, "{INDENT}}}")?;
        writeln!(f)
    }
}

/// Ordered fragments of one generated test class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    test_class_name: String,
    imports: Vec<String>,
    fixture: Fixture,
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn test_class_name(&self) -> &str {
        &self.test_class_name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of cases of the given kind.
    pub fn count(&self, kind: TestKind) -> usize {
        self.cases.iter().filter(|c| c.kind == kind).count()
    }

    /// Render the complete suite source.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for import in &self.imports {
            writeln!(f, "{}", import)?;
        }
        writeln!(f)?;
        writeln!(f, "class {} {{", self.test_class_name)?;
        writeln!(f)?;
        write!(f, "{}", self.fixture)?;
        for case in &self.cases {
            write!(f, "{}", case)?;
        }
        writeln!(f, "}}")
    }
}

/// Builder collecting suite fragments in order.
#[derive(Debug, Clone)]
pub struct TestSuiteBuilder {
    test_class_name: String,
    imports: Vec<String>,
    fixture: Fixture,
    cases: Vec<TestCase>,
}

impl TestSuiteBuilder {
    /// Start a suite for the given class with the standard JUnit imports.
    pub fn new(class: &ParsedClass) -> Self {
        Self {
            test_class_name: class.test_class_name(),
            imports: JUNIT_IMPORTS.iter().map(|s| s.to_string()).collect(),
            fixture: Fixture {
                class_name: class.name.clone(),
                instance_name: class.instance_name(),
            },
            cases: Vec::new(),
        }
    }

    pub fn case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(mut self, cases: impl IntoIterator<Item = TestCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    pub fn build(self) -> TestSuite {
        TestSuite {
            test_class_name: self.test_class_name,
            imports: self.imports,
            fixture: self.fixture,
            cases: self.cases,
        }
    }
}
