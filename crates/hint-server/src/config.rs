//! Server Configuration
//!
//! Read from the environment after `.env` has been loaded.

use std::path::PathBuf;
use std::time::Duration;

/// Hint server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// JSON catalog replacing the built-in hints
    pub hints_file: Option<PathBuf>,

    /// Sessions idle longer than this are dropped
    pub session_ttl: Duration,

    /// How often idle sessions are swept
    pub sweep_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            hints_file: None,
            session_ttl: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|&s| s > 0)
                .map_or(fallback, Duration::from_secs)
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            hints_file: lookup("HINTS_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            session_ttl: secs("SESSION_TTL_SECS", defaults.session_ttl),
            sweep_interval: secs("SESSION_SWEEP_SECS", defaults.sweep_interval),
        }
    }
}
