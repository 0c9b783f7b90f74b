//! CLI module
//!
//! Command-line interface for generating declarations.
//!
//! # Commands
//!
//! - `generate` - Print declarations for a JSON file or stdin
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, SynthesisArgs};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
