//! Application-wide constants
//!
//! Centralized location for magic strings shared across modules.

/// Backend origin used when neither `--api-url` nor the env var is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable overriding the backend origin.
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// Environment variable naming a file to receive log output.
pub const LOG_FILE_ENV: &str = "TASKDECK_LOG_FILE";

/// File under the data dir mirroring the bearer token across restarts.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// File under the data dir holding persisted preferences.
pub const PREFERENCES_FILE: &str = "preferences.json";
