//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, using Figment.

use crate::config::{SvlConfig, TraceSinkKind};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use svl_core::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Whether to search well-known locations when no path is set
    discover: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            discover: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the search for a default config file
    pub fn without_discovery(mut self) -> Self {
        self.discover = false;
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `SvlConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `SVL_REGISTRY__DETECT_CYCLES`)
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or the result does not validate.
    pub fn load(&self) -> Result<SvlConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(SvlConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if self.discover {
            if let Some(default_path) = Self::find_default_config_path() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: SvlConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Fails when serialization or the write fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &SvlConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;
        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(
                home.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render configuration as pretty TOML
///
/// # Errors
///
/// Fails if the configuration cannot be represented in TOML.
pub fn to_toml(config: &SvlConfig) -> Result<String> {
    toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
}

/// Validate configuration values
///
/// # Errors
///
/// Returns a configuration error describing the first invalid value.
pub fn validate_config(config: &SvlConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    if config.registry.trace.sink == TraceSinkKind::Stderr
        && config.registry.trace.prefix.is_empty()
    {
        return Err(Error::configuration(
            "registry.trace.prefix cannot be empty when the stderr sink is selected",
        ));
    }
    Ok(())
}
