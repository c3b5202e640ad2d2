//! Assertion strategy.
//!
//! Chooses the statement wrapped around a generated call from the method's
//! return type text. `boolean` results are only checked for non-nullness,
//! never for their value.

/// Exception class expected by null/edge-case tests.
pub const EXPECTED_EXCEPTION: &str = "IllegalArgumentException";

/// Failure message attached to null/edge-case expectations.
pub const NULL_INPUTS_MESSAGE: &str = "Expected method to throw exception on null inputs";

/// Failure message attached to non-null result checks.
pub const NOT_NULL_MESSAGE: &str = "Result should not be null";

/// Statement shape attached to a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    /// `call;` for `void` methods
    BareCall,
    /// `assertNotNull(call);` for `boolean` methods
    NotNull,
    /// `assertNotNull(call, "...");` for everything else
    NotNullWithMessage,
}

impl Assertion {
    pub fn for_return_type(return_type: &str) -> Self {
        match return_type {
            "void" => Self::BareCall,
            "boolean" => Self::NotNull,
            _ => Self::NotNullWithMessage,
        }
    }

    /// Render the statement for a call expression.
    pub fn statement(&self, call: &str) -> String {
        match self {
            Self::BareCall => format!("{};", call),
            Self::NotNull => format!("assertNotNull({});", call),
            Self::NotNullWithMessage => {
                format!("assertNotNull({}, \"{}\");", call, NOT_NULL_MESSAGE)
            }
        }
    }
}

/// Assertion statement for a call given the callee's return type.
pub fn assertion_for(return_type: &str, call: &str) -> String {
    Assertion::for_return_type(return_type).statement(call)
}
