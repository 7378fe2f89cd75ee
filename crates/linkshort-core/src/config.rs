//! Client configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use linkshort_api::ApiConfig;

use crate::error::CoreError;
use crate::Result;

/// Environment variable overriding the profile data directory.
pub const DATA_DIR_ENV: &str = "LINKSHORT_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Backend base URL
    pub api_base: url::Url,
}

impl Config {
    pub fn new(data_dir: PathBuf, api_base: url::Url) -> Self {
        Self {
            database_path: data_dir.join("linkshort.db"),
            api_base,
        }
    }

    /// Resolve configuration from the environment: data directory from
    /// `LINKSHORT_DATA_DIR` (platform data dir otherwise), base URL from
    /// `LINKSHORT_API_BASE` (local default otherwise).
    pub fn from_env() -> Result<Self> {
        let api = ApiConfig::from_env().map_err(|e| CoreError::Config(e.to_string()))?;
        Ok(Self::new(Self::data_dir(), api.base_url))
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("LinkShort"))
            .unwrap_or_else(|| PathBuf::from(".linkshort"))
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base.clone())
    }
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_database_in_data_dir() {
        let config = Config::new(
            PathBuf::from("/tmp/profile"),
            url::Url::parse("http://localhost:8000").unwrap(),
        );
        assert_eq!(config.database_path, PathBuf::from("/tmp/profile/linkshort.db"));
    }
}
