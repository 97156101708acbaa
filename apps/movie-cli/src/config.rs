//! Layered application configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the YAML file
//! given with `--config`, `APP__*` environment variables (`__` separates
//! nesting levels), then command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use movie_query::{ApiKey, MovieQueryConfig};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub movie_query: MovieQueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Flags that override every other source.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist or any source holds an unknown key
    /// or a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract::<Self>()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(key) = overrides.api_key {
            self.movie_query.api_key = ApiKey::new(key);
        }
        let level = match overrides.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            self.logging.level = level.to_owned();
        }
    }
}
