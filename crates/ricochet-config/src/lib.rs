//! Configuration system for the Ricochet solver.
//!
//! Load solver configuration from TOML or YAML files to control the search
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use ricochet_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [search]
//!     shard_count = 4096
//!     max_depth = 17
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.search.shard_count, 4096);
//! assert_eq!(config.search.channel_capacity, 1000);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use ricochet_config::SolverConfig;
//!
//! let config = SolverConfig::load("ricochet.toml").unwrap_or_default();
//! assert_eq!(config.search.max_depth, 21);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Seed for the predecessor map's hash layout.
    ///
    /// Defaults to a fresh random seed per run; pin it (together with a
    /// worker count of 1) for byte-identical results across runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Search tuning.
    #[serde(default)]
    pub search: SearchConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or contains invalid
    /// TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of map shards.
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.search.shard_count = shard_count;
        self
    }

    /// Sets the number of reader/writer worker pairs.
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.search.worker_count = Some(worker_count);
        self
    }

    /// Sets the maximum search depth in plies.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.search.max_depth = max_depth;
        self
    }

    /// Rejects configurations the solver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.shard_count == 0 {
            return Err(ConfigError::Invalid("shard_count must be positive".into()));
        }
        if self.search.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be positive".into(),
            ));
        }
        if self.search.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be positive".into()));
        }
        if self.search.worker_count == Some(0) {
            return Err(ConfigError::Invalid("worker_count must be positive".into()));
        }
        Ok(())
    }
}

/// Search tuning knobs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Number of predecessor-map shards.
    #[serde(default = "default_shard_count")]
    pub shard_count: usize,

    /// Capacity of each reader-to-writer channel, in packed states.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Number of reader/writer pairs; defaults to available parallelism.
    #[serde(default)]
    pub worker_count: Option<usize>,

    /// Maximum search depth in plies.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            shard_count: default_shard_count(),
            channel_capacity: default_channel_capacity(),
            worker_count: None,
            max_depth: default_max_depth(),
        }
    }
}

fn default_shard_count() -> usize {
    10_000
}

fn default_channel_capacity() -> usize {
    1_000
}

fn default_max_depth() -> usize {
    21
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.random_seed, None);
        assert_eq!(config.search.shard_count, 10_000);
        assert_eq!(config.search.channel_capacity, 1_000);
        assert_eq!(config.search.worker_count, None);
        assert_eq!(config.search.max_depth, 21);
    }

    #[test]
    fn toml_parsing() {
        let config = SolverConfig::from_toml_str(
            r#"
            random_seed = 7

            [search]
            shard_count = 128
            channel_capacity = 16
            worker_count = 2
            max_depth = 11
        "#,
        )
        .unwrap();

        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.search.shard_count, 128);
        assert_eq!(config.search.channel_capacity, 16);
        assert_eq!(config.search.worker_count, Some(2));
        assert_eq!(config.search.max_depth, 11);
    }

    #[test]
    fn yaml_parsing() {
        let config = SolverConfig::from_yaml_str(
            r#"
            random_seed: 7
            search:
              max_depth: 11
        "#,
        )
        .unwrap();

        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.search.max_depth, 11);
        assert_eq!(config.search.shard_count, 10_000);
    }

    #[test]
    fn builder() {
        let config = SolverConfig::new()
            .with_random_seed(123)
            .with_worker_count(1)
            .with_max_depth(5);

        assert_eq!(config.random_seed, Some(123));
        assert_eq!(config.search.worker_count, Some(1));
        assert_eq!(config.search.max_depth, 5);
    }

    #[test]
    fn zero_values_rejected() {
        assert!(SolverConfig::from_toml_str("[search]\nshard_count = 0").is_err());
        assert!(SolverConfig::from_toml_str("[search]\nmax_depth = 0").is_err());
        assert!(SolverConfig::from_toml_str("[search]\nworker_count = 0").is_err());
    }
}
