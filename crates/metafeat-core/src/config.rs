//! Run configuration for metafeature generation.
//!
//! Configuration can be loaded from a TOML file:
//!
//! ```toml
//! big_m = 1e12
//! operations = ["mul", "div"]
//! ```
//!
//! Both keys are optional; missing keys take the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ops::OperationSet;

/// Value substituted for a quotient whose denominator is zero.
///
/// `i64::MAX / 10^8`, truncated.
pub const DEFAULT_BIG_M: f64 = 92_233_720_368.0;

/// Errors that can occur when building a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid big_m: {0} (must be finite and positive)")]
    InvalidBigM(f64),
}

/// Parameters threaded through planning and generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetafeatureConfig {
    /// Enabled operations
    pub operations: OperationSet,

    /// Division-by-zero sentinel
    pub big_m: f64,
}

impl Default for MetafeatureConfig {
    fn default() -> Self {
        Self {
            operations: OperationSet::empty(),
            big_m: DEFAULT_BIG_M,
        }
    }
}

impl MetafeatureConfig {
    pub fn new(operations: OperationSet) -> Self {
        Self {
            operations,
            ..Self::default()
        }
    }

    /// Replace the division-by-zero sentinel.
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    /// Enable additional operations, keeping those already enabled.
    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = self.operations.union(&operations);
        self
    }

    /// Check that the sentinel is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.big_m.is_finite() || self.big_m <= 0.0 {
            return Err(ConfigError::InvalidBigM(self.big_m));
        }
        Ok(())
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MetafeatureConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = MetafeatureConfig::default();
        assert!(config.operations.is_empty());
        assert_eq!(config.big_m, 92233720368.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_toml() {
        let config = MetafeatureConfig::from_toml_str(
            r#"
big_m = 1e6
operations = ["div", "mul"]
"#,
        )
        .unwrap();

        assert_eq!(config.big_m, 1e6);
        assert!(config.operations.contains(Operation::Multiply));
        assert!(config.operations.contains(Operation::Divide));
        assert!(!config.operations.contains(Operation::Add));
    }

    #[test]
    fn parse_empty_toml_uses_defaults() {
        let config = MetafeatureConfig::from_toml_str("").unwrap();
        assert_eq!(config, MetafeatureConfig::default());
    }

    #[test]
    fn unknown_operation_in_file_is_an_error() {
        let result = MetafeatureConfig::from_toml_str(r#"operations = ["pow"]"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_non_positive_big_m() {
        let result = MetafeatureConfig::from_toml_str("big_m = -5.0");
        assert!(matches!(result, Err(ConfigError::InvalidBigM(_))));

        let config = MetafeatureConfig::default().with_big_m(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn with_operations_is_a_union() {
        let config = MetafeatureConfig::new(OperationSet::from_tokens(["mul"]))
            .with_operations(OperationSet::from_tokens(["sub"]));
        assert_eq!(config.operations.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "big_m = 42.0").unwrap();
        writeln!(file, "operations = [\"add\"]").unwrap();

        let config = MetafeatureConfig::load(file.path()).unwrap();
        assert_eq!(config.big_m, 42.0);
        assert!(config.operations.contains(Operation::Add));
    }

    #[test]
    fn load_missing_file() {
        let result = MetafeatureConfig::load(Path::new("/nonexistent/metafeat.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
