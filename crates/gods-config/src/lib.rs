//! # gods-config
//!
//! Layered configuration loading for `gods` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GODS_*` prefix, `__` as separator)
//! 2. Working-directory `gods.toml`
//! 3. User-level `~/.config/gods/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GODS_DATA__REFERENCE_PATH` -> `data.reference_path`,
//! `GODS_GENERAL__DEBUG` -> `general.debug`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gods_config::GodsConfig;
//!
//! let config = GodsConfig::load().expect("config");
//! println!("reference table: {}", config.data.reference_path.display());
//! ```

mod data;
mod error;
mod general;

pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the working-directory config.
pub const LOCAL_CONFIG_FILE: &str = "gods.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GodsConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GodsConfig {
    /// Load configuration from all sources and validate it.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a configuration from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Working-directory config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GODS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gods").join("config.toml"))
    }
}
