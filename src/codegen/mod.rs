//! Declaration rendering
//!
//! Turns target-independent [`Declaration`]s into source text.
//!
//! # Targets
//!
//! - **Go**: `type X struct { ... }` with `json:"key"` tags
//! - **Rust**: serde-derived structs with `#[serde(rename = "key")]`

mod go;
mod rust;

pub use go::GoGenerator;
pub use rust::RustGenerator;

use crate::schema::Declaration;
use crate::types::Target;

/// Renders one declaration as source text in a target language
pub trait TargetGenerator: Send + Sync {
    /// Render the declaration, including a trailing newline
    fn render(&self, declaration: &Declaration) -> String;

    /// Whether `name` would clash with a keyword or a predeclared type
    fn is_reserved(&self, _name: &str) -> bool {
        false
    }

    /// Whether a field can be bound to this JSON key
    fn supports_key(&self, _key: &str) -> bool {
        true
    }

    /// Text placed once before all declarations
    fn preamble(&self) -> Option<&'static str> {
        None
    }
}

/// Get the generator for a target
pub fn generator_for(target: Target) -> &'static dyn TargetGenerator {
    match target {
        Target::Go => &GoGenerator,
        Target::Rust => &RustGenerator,
    }
}
