//! Locations of the reference table and the used-name log.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_reference_path() -> PathBuf {
    PathBuf::from("godinfos.csv")
}

fn default_used_log_path() -> PathBuf {
    PathBuf::from("used_names.csv")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Tab-separated reference table.
    #[serde(default = "default_reference_path")]
    pub reference_path: PathBuf,

    /// Tab-separated used-name log. New names are appended here.
    #[serde(default = "default_used_log_path")]
    pub used_log_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            reference_path: default_reference_path(),
            used_log_path: default_used_log_path(),
        }
    }
}
