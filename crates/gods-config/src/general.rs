//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_batch_suffix() -> String {
    String::from(".txt")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// File-name suffix that turns the lookup argument into a batch file.
    /// Compared case-insensitively.
    #[serde(default = "default_batch_suffix")]
    pub batch_suffix: String,

    /// Enable debug logging without `--verbose`.
    #[serde(default)]
    pub debug: bool,
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_suffix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.batch_suffix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// `true` if `argument` names a batch file.
    #[must_use]
    pub fn is_batch_file(&self, argument: &str) -> bool {
        argument
            .to_lowercase()
            .ends_with(&self.batch_suffix.to_lowercase())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            batch_suffix: default_batch_suffix(),
            debug: false,
        }
    }
}
