//! Common types used throughout json-structgen
//!
//! Policy enums shared by the synthesizer, the configuration file, the
//! CLI flags and the HTTP query parameters.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Number Policy
// ============================================================================

/// How JSON numbers are typed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Every number becomes an integer field
    #[default]
    Integer,
    /// Whole numbers become integers, everything else floats
    Infer,
}

// ============================================================================
// Field Order
// ============================================================================

/// Order in which object keys become fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// Keys in the order they appear in the document
    #[default]
    Source,
    /// Keys sorted lexically
    Sorted,
}

// ============================================================================
// Field Naming
// ============================================================================

/// How JSON keys are turned into exported identifiers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldNaming {
    /// Upper-case the first character only (`first_name` -> `First_name`)
    #[default]
    Capitalize,
    /// UpperCamelCase across word separators (`first_name` -> `FirstName`)
    Camel,
}

// ============================================================================
// Target
// ============================================================================

/// Language the declarations are rendered in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Go structs with `json` tags
    #[default]
    Go,
    /// Rust structs with serde attributes
    Rust,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Go => write!(f, "go"),
            Target::Rust => write!(f, "rust"),
        }
    }
}
