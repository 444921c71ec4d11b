//! Configuration module for the Name Meaning backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::lookup::DEFAULT_LOOKUP_DELAY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file backing the key-value store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Artificial latency applied to every name lookup
    pub lookup_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("NAME_MEANING_DB_PATH")
            .unwrap_or_else(|_| "./data/names.sqlite".to_string())
            .into();

        let bind_addr = env::var("NAME_MEANING_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid NAME_MEANING_BIND_ADDR format");

        let log_level = env::var("NAME_MEANING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("NAME_MEANING_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let lookup_delay = env::var("NAME_MEANING_LOOKUP_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LOOKUP_DELAY);

        Self {
            db_path,
            bind_addr,
            log_level,
            log_json,
            lookup_delay,
        }
    }
}
