//! Run configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables and command-line flags.
//!
//! ```yaml
//! connection:
//!   host: localhost
//!   port: 5432
//!   database: benchmark_db
//!   user: postgres
//!   password: postgres
//! plan:
//!   categories: 2000
//!   items: 100000
//!   batch_size: 1000
//! seed: 42
//! ```

use crate::SeedArgs;
use catalog_core::SeedPlan;
use catalog_populate_postgresql::ConnectionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Values parse but cannot describe a valid run
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a run needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub connection: ConnectionConfig,
    pub plan: SeedPlan,
    /// Fixed RNG seed; random values differ on every run when unset
    pub seed: Option<u64>,
}

impl SeedConfig {
    /// Load from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve the configuration for a command invocation.
    pub fn load(args: &SeedArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Overlay values given as flags or environment variables.
    pub fn apply_args(&mut self, args: &SeedArgs) {
        self.connection.apply_args(&args.connection);
        if let Some(categories) = args.categories {
            self.plan.categories = categories;
        }
        if let Some(items) = args.items {
            self.plan.items = items;
        }
        if let Some(batch_size) = args.batch_size {
            self.plan.batch_size = batch_size;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plan.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        if self.plan.categories == 0 && self.plan.items > 0 {
            return Err(ConfigError::Invalid(format!(
                "{} items requested but no categories to assign them to",
                self.plan.items
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_populate_postgresql::PostgreSQLConnectionArgs;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();

        assert_eq!(config.plan.categories, 2000);
        assert_eq!(config.plan.items, 100_000);
        assert_eq!(config.plan.batch_size, 1000);
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.port, 5432);
        assert_eq!(config.connection.database, "benchmark_db");
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
connection:
  host: db.internal
plan:
  items: 5000
seed: 7
"#;
        let config = SeedConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.connection.host, "db.internal");
        assert_eq!(config.connection.port, 5432);
        assert_eq!(config.plan.categories, 2000);
        assert_eq!(config.plan.items, 5000);
        assert_eq!(config.plan.batch_size, 1000);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = SeedConfig::from_yaml("plan: [1, 2]");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config = SeedConfig::from_yaml("plan:\n  categories: 10\n  items: 100\n").unwrap();
        let args = SeedArgs {
            items: Some(250),
            seed: Some(1),
            connection: PostgreSQLConnectionArgs {
                database: Some("bench".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        config.apply_args(&args);

        assert_eq!(config.plan.categories, 10);
        assert_eq!(config.plan.items, 250);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.connection.database, "bench");
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let mut config = SeedConfig::default();
        config.plan.batch_size = 0;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_items_without_categories() {
        let mut config = SeedConfig::default();
        config.plan.categories = 0;
        assert!(config.validate().is_err());

        config.plan.items = 0;
        assert!(config.validate().is_ok());
    }
}
