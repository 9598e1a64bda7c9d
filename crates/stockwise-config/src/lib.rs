//! Run configuration for stockwise.
//!
//! Load objective weights, solver settings, and instance-generator
//! ranges from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use stockwise_config::RunConfig;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     [weights]
//!     cost = 2.0
//!
//!     [solver]
//!     parallel = true
//!
//!     [generator]
//!     warehouses = 6
//!     stock = { min = 1, max = 50 }
//! "#).unwrap();
//!
//! assert_eq!(config.weights.cost, 2.0);
//! assert_eq!(config.weights.priority, 0.8);
//! assert_eq!(config.generator.warehouses, 6);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use stockwise_config::RunConfig;
//!
//! let config = RunConfig::load("run.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockwise_core::Weightage;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RunConfig {
    /// Objective criterion weights.
    pub weights: WeightsConfig,

    /// Bundled solver settings.
    pub solver: SolverConfig,

    /// Synthetic instance generation settings.
    pub generator: GeneratorConfig,

    /// Report output settings.
    pub output: OutputConfig,
}

impl RunConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid
    /// TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the four objective weights.
    pub fn with_weights(mut self, cost: f64, priority: f64, distance: f64, days: f64) -> Self {
        self.weights = WeightsConfig {
            cost,
            priority,
            distance,
            days,
        };
        self
    }

    /// Enables or disables parallel sub-model solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.solver.parallel = parallel;
        self
    }

    /// Sets the generator's entity counts.
    pub fn with_counts(mut self, warehouses: usize, orders: usize, products: usize) -> Self {
        self.generator.warehouses = warehouses;
        self.generator.orders = orders;
        self.generator.products = products;
        self
    }

    /// The configured weights as a domain [`Weightage`].
    pub fn weightage(&self) -> Weightage {
        Weightage {
            cost: self.weights.cost,
            priority: self.weights.priority,
            distance: self.weights.distance,
            days: self.weights.days,
        }
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("weights.cost", self.weights.cost),
            ("weights.priority", self.weights.priority),
            ("weights.distance", self.weights.distance),
            ("weights.days", self.weights.days),
            ("solver.score_epsilon", self.solver.score_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        self.generator.validate()
    }
}

/// Objective criterion weights; each scales one normalized criterion.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct WeightsConfig {
    /// Emphasis on low shipping cost.
    pub cost: f64,

    /// Emphasis on preferred warehouses.
    pub priority: f64,

    /// Emphasis on short distance.
    pub distance: f64,

    /// Emphasis on fast delivery.
    pub days: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        WeightsConfig {
            cost: 1.0,
            priority: 0.8,
            distance: 0.6,
            days: 0.4,
        }
    }
}

/// Settings for the bundled flow solver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Solve product sub-models on the rayon pool.
    pub parallel: bool,

    /// Tolerance below which a route score counts as zero.
    pub score_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            parallel: false,
            score_epsilon: 1e-9,
        }
    }
}

/// An inclusive integer sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeConfig {
    /// Smallest value the generator may draw.
    pub min: i64,

    /// Largest value the generator may draw.
    pub max: i64,
}

impl RangeConfig {
    /// A range spanning `min..=max`.
    pub fn new(min: i64, max: i64) -> Self {
        RangeConfig { min, max }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min < 0 {
            return Err(ConfigError::Invalid(format!(
                "generator.{name}.min must be non-negative, got {}",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "generator.{name} is empty: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Synthetic instance generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Number of warehouses.
    pub warehouses: usize,

    /// Number of orders.
    pub orders: usize,

    /// Number of products.
    pub products: usize,

    /// Warehouse priority ranks.
    pub priority: RangeConfig,

    /// Per-(warehouse, product) stock units.
    pub stock: RangeConfig,

    /// Per-(order, product) demand units.
    pub demand: RangeConfig,

    /// Per-route shipping cost.
    pub cost: RangeConfig,

    /// Per-route distance.
    pub distance: RangeConfig,

    /// Per-route delivery days.
    pub days: RangeConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            warehouses: 4,
            orders: 2,
            products: 10,
            priority: RangeConfig::new(1, 10),
            stock: RangeConfig::new(1, 100),
            demand: RangeConfig::new(1, 10),
            cost: RangeConfig::new(1, 300),
            distance: RangeConfig::new(1, 200),
            days: RangeConfig::new(1, 7),
        }
    }
}

impl GeneratorConfig {
    /// Checks every sampling range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.priority.validate("priority")?;
        self.stock.validate("stock")?;
        self.demand.validate("demand")?;
        self.cost.validate("cost")?;
        self.distance.validate("distance")?;
        self.days.validate("days")?;
        Ok(())
    }
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OutputConfig {
    /// Directory the CSV reports are written into.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.weights.cost, 1.0);
        assert_eq!(config.weights.days, 0.4);
        assert!(!config.solver.parallel);
        assert_eq!(config.generator.warehouses, 4);
        assert_eq!(config.generator.orders, 2);
        assert_eq!(config.generator.products, 10);
        assert_eq!(config.generator.stock, RangeConfig::new(1, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            [weights]
            cost = 2.0
            days = 0.1

            [solver]
            parallel = true
            score_epsilon = 1e-6

            [generator]
            warehouses = 8
            demand = { min = 2, max = 20 }

            [output]
            directory = "reports"
        "#;

        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.weights.cost, 2.0);
        assert_eq!(config.weights.priority, 0.8);
        assert_eq!(config.weights.days, 0.1);
        assert!(config.solver.parallel);
        assert_eq!(config.solver.score_epsilon, 1e-6);
        assert_eq!(config.generator.warehouses, 8);
        assert_eq!(config.generator.demand, RangeConfig::new(2, 20));
        assert_eq!(config.generator.cost, RangeConfig::new(1, 300));
        assert_eq!(config.output.directory, PathBuf::from("reports"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            weights:
              priority: 1.5
            generator:
              orders: 5
              stock:
                min: 10
                max: 40
        "#;

        let config = RunConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.weights.priority, 1.5);
        assert_eq!(config.generator.orders, 5);
        assert_eq!(config.generator.stock, RangeConfig::new(10, 40));
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_weights(1.0, 1.0, 0.0, 0.0)
            .with_parallel(true)
            .with_counts(3, 3, 2);

        assert_eq!(config.weightage().distance, 0.0);
        assert!(config.solver.parallel);
        assert_eq!(config.generator.products, 2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = RunConfig::new().with_weights(1.0, -0.5, 0.6, 0.4);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut config = RunConfig::default();
        config.generator.days = RangeConfig::new(9, 3);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("generator.days"));
    }

    #[test]
    fn test_weightage_conversion() {
        let weightage = RunConfig::default().weightage();
        assert!(weightage.validate().is_ok());
        assert_eq!(weightage.cost, 1.0);
        assert_eq!(weightage.priority, 0.8);
    }
}
