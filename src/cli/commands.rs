//! CLI commands and argument parsing

use crate::schema::SynthesisOptions;
use crate::types::{FieldNaming, FieldOrder, NumberPolicy, Target};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate struct declarations from JSON samples
#[derive(Parser, Debug)]
#[command(name = "json-structgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory containing index.html and static assets
        #[arg(long)]
        static_dir: Option<PathBuf>,

        #[command(flatten)]
        synthesis: SynthesisArgs,
    },

    /// Generate declarations for a JSON document
    Generate {
        /// Input file ('-' for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON envelope ({"structCode", "data"}) instead of plain code
        #[arg(long)]
        envelope: bool,

        #[command(flatten)]
        synthesis: SynthesisArgs,
    },
}

/// Synthesis overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SynthesisArgs {
    /// Output language
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Name of the root declaration
    #[arg(long)]
    pub root_name: Option<String>,

    /// Sort fields by key instead of keeping document order
    #[arg(long)]
    pub sorted: bool,

    /// How JSON numbers are typed
    #[arg(long)]
    pub number_policy: Option<NumberPolicy>,

    /// How keys become identifiers
    #[arg(long)]
    pub field_naming: Option<FieldNaming>,

    /// Deepest object nesting accepted
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl SynthesisArgs {
    /// Apply the flags that were given on top of `options`
    pub fn apply(&self, options: &mut SynthesisOptions) {
        if let Some(target) = self.target {
            options.target = target;
        }
        if let Some(name) = &self.root_name {
            options.root_name.clone_from(name);
        }
        if self.sorted {
            options.field_order = FieldOrder::Sorted;
        }
        if let Some(policy) = self.number_policy {
            options.number_policy = policy;
        }
        if let Some(naming) = self.field_naming {
            options.field_naming = naming;
        }
        if let Some(depth) = self.max_depth {
            options.max_depth = depth;
        }
    }
}
