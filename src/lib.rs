//! # json-structgen
//!
//! Infers struct declarations from a single JSON sample.
//!
//! Every object in the document becomes a named declaration: nested objects
//! are named after their field (`address` -> `Address`), arrays of objects
//! after their field plus `Item` (`items` -> `ItemsItem`), using the first
//! element as the representative shape. Leaves map to string, boolean and
//! integer fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_structgen::{Generator, SynthesisOptions};
//! use serde_json::json;
//!
//! let generator = Generator::new(SynthesisOptions::default());
//! let output = generator
//!     .generate(json!({"name": "Alice", "address": {"city": "NYC"}}))
//!     .unwrap();
//!
//! assert!(output.struct_code.contains("type Address struct {"));
//! assert!(output.struct_code.ends_with("\tAddress Address `json:\"address\"`\n}\n"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │     HTTP server (POST /convert)   │   CLI (generate)      │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!               Generator (one registry per call)
//!                              │
//! ┌──────────────┬──────────────┬─────────────┬──────────────┐
//! │ Synthesizer  │ Type Mapper  │  Registry   │ Go / Rust    │
//! │ naming, depth│ leaf types   │ name → text │ rendering    │
//! └──────────────┴──────────────┴─────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and policy enums
pub mod types;

/// Schema inference and struct synthesis
pub mod schema;

/// Target language rendering
pub mod codegen;

/// Request-level generation facade
pub mod generator;

/// Configuration file support
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use generator::{GeneratedOutput, Generator};
pub use schema::{Registry, SynthesisOptions, Synthesizer};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
