//! Configuration management for polylex.
//!
//! Settings are layered: built-in defaults, `~/.polylexrc`, `./.polylexrc`,
//! `POLYLEX_*` environment variables, then command-line flags. Files hold
//! `key=value` lines; `#` and `;` start comments.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{PolylexError, Result};
use crate::render::Format;

/// Name of the per-user and per-project config file.
pub const CONFIG_FILE_NAME: &str = ".polylexrc";

const ENV_PREFIX: &str = "POLYLEX_";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for polylex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format
    pub format: Format,

    /// Whether to color terminal output
    pub color: bool,

    /// Log level used when `RUST_LOG` is unset
    pub loglevel: String,

    /// Forced language extension, overriding file suffixes
    pub language: Option<String>,

    /// Unrecognized keys, kept for `--show-config`
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Grid,
            color: true,
            loglevel: "warn".to_string(),
            language: None,
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from default locations and the environment.
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                config.merge_from_file(&user_config_path)?;
            }
        }

        let project_config_path = PathBuf::from(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            config.merge_from_file(&project_config_path)?;
        }

        config.merge_env(std::env::vars())?;

        Ok(config)
    }

    /// Merge configuration from a file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.merge_from_str(&content).map_err(|e| match e {
            PolylexError::Config(msg) => {
                PolylexError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Merge `key=value` lines.
    pub fn merge_from_str(&mut self, content: &str) -> Result<()> {
        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                self.set(key.trim(), value.trim())?;
            }
        }

        Ok(())
    }

    /// Merge `POLYLEX_*` variables; `POLYLEX_LOG_LEVEL` maps to `log-level`.
    pub fn merge_env(&mut self, vars: impl IntoIterator<Item = (String, String)>) -> Result<()> {
        for (key, value) in vars {
            if let Some(config_key) = key.strip_prefix(ENV_PREFIX) {
                let config_key = config_key.to_lowercase().replace('_', "-");
                self.set(&config_key, &value)?;
            }
        }
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_color {
            self.color = false;
        }
        if let Some(lang) = &cli.lang {
            self.language = Some(lang.clone());
        }
        if cli.verbose {
            self.loglevel = "debug".to_string();
        } else if cli.quiet {
            self.loglevel = "error".to_string();
        }
    }

    /// Set a configuration value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "format" => self.format = value.parse()?,
            "color" => self.color = parse_bool(key, value)?,
            "loglevel" | "log-level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(PolylexError::Config(format!(
                        "invalid loglevel '{}'",
                        value
                    )));
                }
                self.loglevel = level;
            }
            "language" | "lang" => self.language = Some(value.to_string()),
            _ => {
                self.extra.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(PolylexError::Config(format!(
            "invalid boolean '{}' for {}",
            value, key
        ))),
    }
}

/// Get the user config path.
fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}
