use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, DEFAULT_API_URL};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory holding credentials, preferences, and optional logs.
    pub data_dir: PathBuf,
    /// Backend origin, without a trailing slash.
    pub api_url: String,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P, api_url: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            api_url: api_url.into(),
        }
    }

    /// Backend origin from the environment, falling back to the default.
    pub fn api_url_from_env() -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .map(|home| home.join(".taskdeck"))
            .unwrap_or_else(|| PathBuf::from(".taskdeck"));
        Self::new(data_dir, Self::api_url_from_env())
    }
}
