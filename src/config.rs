//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Number of questions returned by the question listing endpoints.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// SQLite database file; the in-memory store is used when unset
    pub database_path: Option<PathBuf>,
    /// JSON seed file applied to an empty store at startup
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `DATABASE_PATH` - SQLite database file (default: in-memory store)
    /// - `SEED_FILE` - JSON seed file (default: built-in categories)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            database_path: non_empty_path("DATABASE_PATH"),
            seed_file: non_empty_path("SEED_FILE"),
        }
    }
}

fn non_empty_path(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            database_path: None,
            seed_file: None,
        }
    }
}
