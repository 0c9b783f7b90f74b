//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, SynthesisArgs};
use crate::cli::server::{serve, ServerConfig};
use crate::config::AppConfig;
use crate::error::{Error, Result, ResultExt};
use crate::generator::Generator;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let mut config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve {
                host,
                port,
                static_dir,
                synthesis,
            } => {
                if let Some(host) = host {
                    config.server.host.clone_from(host);
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(dir) = static_dir {
                    config.server.static_dir.clone_from(dir);
                }
                synthesis.apply(&mut config.synthesis);
                config.validate()?;

                serve(ServerConfig {
                    settings: config.server,
                    synthesis: config.synthesis,
                })
                .await
            }
            Commands::Generate {
                input,
                output,
                envelope,
                synthesis,
            } => self.generate(config, input, output.as_ref(), *envelope, synthesis),
        }
    }

    /// Load configuration file, or defaults when none was given
    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => AppConfig::load(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Generate declarations for one document
    fn generate(
        &self,
        mut config: AppConfig,
        input: &str,
        output: Option<&PathBuf>,
        envelope: bool,
        synthesis: &SynthesisArgs,
    ) -> Result<()> {
        synthesis.apply(&mut config.synthesis);

        let source = read_input(input)?;
        if source.trim().is_empty() {
            return Err(Error::invalid_input(format!("'{input}' is empty")));
        }
        let value: Value = serde_json::from_str(&source)?;

        let generated = Generator::new(config.synthesis).generate(value)?;
        let text = if envelope {
            serde_json::to_string_pretty(&generated)?
        } else {
            generated.struct_code
        };

        match output {
            Some(path) => {
                fs::write(path, &text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                if self.cli.verbose {
                    eprintln!("Wrote {}", path.display());
                }
            }
            None => print!("{text}"),
        }

        Ok(())
    }
}

/// Read a document from a file, or stdin for `-`
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }

    let path = Path::new(input);
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: input.to_string(),
        });
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {input}"))
}
