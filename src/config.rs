//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use tracing::warn;

/// Largest accepted slot capacity; larger values fall back to the default
pub const MAX_CAPACITY: usize = 1 << 20;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of slots in the cache
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between diagnostic cache dumps, 0 disables the task
    pub snapshot_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SLOT_CAPACITY` - Number of cache slots, at most `MAX_CAPACITY` (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SNAPSHOT_INTERVAL` - Dump frequency in seconds, 0 disables (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let capacity = match parse_var::<usize>("SLOT_CAPACITY") {
            Some(capacity) if capacity > MAX_CAPACITY => {
                warn!(
                    "SLOT_CAPACITY={} exceeds maximum of {}, using default {}",
                    capacity, MAX_CAPACITY, defaults.capacity
                );
                defaults.capacity
            }
            Some(capacity) => capacity,
            None => defaults.capacity,
        };
        Self {
            capacity,
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            snapshot_interval: parse_var("SNAPSHOT_INTERVAL")
                .unwrap_or(defaults.snapshot_interval),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 10,
            server_port: 3000,
            snapshot_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.snapshot_interval, 60);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("SLOT_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("SNAPSHOT_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.snapshot_interval, 60);

        env::set_var("SLOT_CAPACITY", "25");
        env::set_var("SNAPSHOT_INTERVAL", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.capacity, 25);
        assert_eq!(config.snapshot_interval, 60);

        env::set_var("SLOT_CAPACITY", "1000000000000");
        let config = Config::from_env();
        assert_eq!(config.capacity, 10);

        env::set_var("SLOT_CAPACITY", MAX_CAPACITY.to_string());
        let config = Config::from_env();
        assert_eq!(config.capacity, MAX_CAPACITY);

        env::remove_var("SLOT_CAPACITY");
        env::remove_var("SNAPSHOT_INTERVAL");
    }
}
