//! # lc-config
//!
//! Layered configuration loading for Lifecourse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIFECOURSE_*` prefix, `__` as separator)
//! 2. Project-level `lifecourse.toml`
//! 3. User-level `~/.config/lifecourse/config.toml`
//! 4. Built-in defaults
//!
//! With no files and no environment, the exporter writes `src/data/*.json`
//! with the question bank as an object keyed by id.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LIFECOURSE_OUTPUT__DIR` -> `output.dir`,
//! `LIFECOURSE_VALIDATION__STRICT` -> `validation.strict`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lc_config::LcConfig;
//!
//! let config = LcConfig::load_with_dotenv().expect("config");
//! println!("writing to {}", config.output.dir.display());
//! ```

mod error;
mod output;
mod validation;

pub use error::ConfigError;
pub use output::{OutputConfig, QuestionLayout};
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "lifecourse.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LcConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl LcConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value fails [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::load()
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Path::new(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LIFECOURSE_").split("__"))
    }

    /// Check values figment cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lifecourse").join("config.toml"))
    }
}
