//! Error types for json-structgen
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::Target;
use thiserror::Error;

/// The main error type for json-structgen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // ============================================================================
    // Synthesis Errors
    // ============================================================================
    #[error("Root value must be a JSON object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("Input too deeply nested: exceeds maximum depth of {max_depth}")]
    TooDeeplyNested { max_depth: usize },

    #[error("Invalid type name '{name}': must start with a letter and contain only letters, digits or '_'")]
    InvalidTypeName { name: String },

    #[error("Type name '{name}' is reserved in {target} output")]
    ReservedTypeName { name: String, target: Target },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid type name error
    pub fn invalid_type_name(name: impl Into<String>) -> Self {
        Self::InvalidTypeName { name: name.into() }
    }

    /// Check if this error was caused by the submitted payload rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::JsonParse(_)
                | Error::InvalidInput { .. }
                | Error::RootNotObject { .. }
                | Error::TooDeeplyNested { .. }
                | Error::InvalidTypeName { .. }
                | Error::ReservedTypeName { .. }
        )
    }
}

/// Result type alias for json-structgen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::RootNotObject { found: "array" };
        assert_eq!(
            err.to_string(),
            "Root value must be a JSON object, found array"
        );

        let err = Error::ReservedTypeName {
            name: "String".to_string(),
            target: Target::Rust,
        };
        assert_eq!(
            err.to_string(),
            "Type name 'String' is reserved in rust output"
        );

        let err = Error::TooDeeplyNested { max_depth: 3 };
        assert_eq!(
            err.to_string(),
            "Input too deeply nested: exceeds maximum depth of 3"
        );
    }

    #[test]
    fn test_json_parse_error_display() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::RootNotObject { found: "string" }.is_client_error());
        assert!(Error::TooDeeplyNested { max_depth: 1 }.is_client_error());
        assert!(Error::invalid_type_name("1abc").is_client_error());
        assert!(Error::invalid_input("empty body").is_client_error());
        assert!(Error::ReservedTypeName {
            name: "Self".to_string(),
            target: Target::Rust
        }
        .is_client_error());

        assert!(!Error::config("bad").is_client_error());
        assert!(!Error::Other("boom".to_string()).is_client_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
