//! Error types for the unitgen system.

/// Result type alias for unitgen operations.
pub type Result<T> = std::result::Result<T, UnitgenError>;

/// Main error type for the unitgen system.
#[derive(Debug, thiserror::Error)]
pub enum UnitgenError {
    /// Source text could not be turned into a declaration model
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped anyhow errors for compatibility
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnitgenError {
    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pick_variant() {
        assert!(UnitgenError::parse("bad").is_parse());
        assert!(UnitgenError::config("bad").is_config());
        assert!(!UnitgenError::config("bad").is_parse());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(UnitgenError::parse("eof").to_string(), "Parse error: eof");
        assert_eq!(
            UnitgenError::config("empty").to_string(),
            "Configuration error: empty"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UnitgenError = io.into();
        assert!(matches!(err, UnitgenError::Io(_)));
    }
}
