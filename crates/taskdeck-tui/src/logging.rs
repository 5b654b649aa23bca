//! Opt-in file logging. The terminal owns stdout and stderr while the UI is
//! up, so traces only go somewhere when TASKDECK_LOG_FILE points at a path.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use taskdeck_core::constants::LOG_FILE_ENV;

pub fn init() {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return;
    };
    if path.is_empty() {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        eprintln!("could not open log file {}", path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
