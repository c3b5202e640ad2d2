//! Heuristic value dictionary.
//!
//! Maps a declared parameter type and a [`ValueCategory`] to the Java literal
//! used in generated calls. Types are classified by their exact, case-sensitive
//! text into a [`TypeBucket`]; the literal is then looked up on the
//! `(bucket, category)` pair. Every pair resolves, and anything outside the
//! named buckets renders as `null` regardless of category.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Literal used for every type the dictionary does not know.
pub const NULL_LITERAL: &str = "null";

/// Representative input class for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueCategory {
    Positive,
    Negative,
    /// Also the empty/falsy value for strings and booleans
    Zero,
    Max,
}

impl ValueCategory {
    /// All categories in boundary-row order.
    pub const ALL: [ValueCategory; 4] = [
        ValueCategory::Positive,
        ValueCategory::Negative,
        ValueCategory::Zero,
        ValueCategory::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Zero => "ZERO",
            Self::Max => "MAX",
        }
    }

    /// Trailing comment for this category's row in a `@CsvSource` block.
    pub fn row_label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive values",
            Self::Negative => "Negative values",
            Self::Zero => "Zero/Empty values",
            Self::Max => "Extreme boundary values",
        }
    }
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dictionary bucket a declared type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeBucket {
    /// `int`, `long`, `short`
    Integer,
    /// `double`, `float`
    Floating,
    /// `boolean`
    Boolean,
    /// `String`
    Text,
    /// Any other type: objects, arrays, generics, unknown names
    Reference,
}

impl TypeBucket {
    /// Classify a declared type by its exact text.
    pub fn classify(declared_type: &str) -> Self {
        match declared_type {
            "int" | "long" | "short" => Self::Integer,
            "double" | "float" => Self::Floating,
            "boolean" => Self::Boolean,
            "String" => Self::Text,
            _ => Self::Reference,
        }
    }
}

/// Literal text for a bucket and category.
pub fn literal(bucket: TypeBucket, category: ValueCategory) -> &'static str {
    use TypeBucket::*;
    use ValueCategory::*;

    match (bucket, category) {
        (Integer, Positive) => "5",
        (Integer, Negative) => "-5",
        (Integer, Zero) => "0",
        (Integer, Max) => "2147483647",

        (Floating, Positive) => "5.5",
        (Floating, Negative) => "-5.5",
        (Floating, Zero) => "0.0",
        (Floating, Max) => "99999.99",

        (Boolean, Zero) => "false",
        (Boolean, Positive | Negative | Max) => "true",

        (Text, Positive) => "\"valid_string\"",
        (Text, Negative) => "\"!@#$%^&*()\"",
        (Text, Zero) => "\"\"",
        (Text, Max) => "\"a_very_long_string_exceeding_standard_limits\"",

        (Reference, _) => NULL_LITERAL,
    }
}

/// Literal text for a declared type and category.
pub fn value_for(declared_type: &str, category: ValueCategory) -> &'static str {
    let bucket = TypeBucket::classify(declared_type);
    if bucket == TypeBucket::Reference {
        debug!(declared_type, "No heuristic for type, falling back to null");
    }
    literal(bucket, category)
}
