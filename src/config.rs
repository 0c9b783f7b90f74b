//! Configuration types
//!
//! Service and synthesis settings, loaded from an optional YAML file.
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 8080
//!   static_dir: static
//! synthesis:
//!   root_name: Data
//!   max_depth: 64
//!   field_order: sorted
//!   target: go
//! ```

use crate::error::{Error, Result};
use crate::codegen::generator_for;
use crate::schema::naming::is_valid_type_name;
use crate::schema::SynthesisOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerSettings,

    /// Declaration synthesis settings
    pub synthesis: SynthesisOptions,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !is_valid_type_name(&self.synthesis.root_name) {
            return Err(Error::invalid_config(
                "synthesis.root_name",
                format!("'{}' is not a valid type name", self.synthesis.root_name),
            ));
        }

        if generator_for(self.synthesis.target).is_reserved(&self.synthesis.root_name) {
            return Err(Error::invalid_config(
                "synthesis.root_name",
                format!(
                    "'{}' is reserved in {} output",
                    self.synthesis.root_name, self.synthesis.target
                ),
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(Error::invalid_config(
                "server.max_body_bytes",
                "must be greater than zero",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory holding `index.html` and other static assets
    pub static_dir: PathBuf,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static"),
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}
