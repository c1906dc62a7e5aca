//! Rating system configuration

use crate::error::{EloError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// K-factor of the classical Elo system
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// How strictly match scores are checked before a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Any finite score is accepted, e.g. aggregate scores of a multi-game match
    #[default]
    Permissive,
    /// Scores must lie in 0.0..=1.0 and sum to exactly one game
    Strict,
}

/// Elo calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// Maximum rating swing per match
    pub k_factor: f64,
    /// Score validation policy
    pub validation: ValidationMode,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            validation: ValidationMode::Permissive,
        }
    }
}

impl EloConfig {
    /// Default configuration with a different K-factor
    pub fn with_k_factor(k_factor: f64) -> Self {
        Self {
            k_factor,
            ..Self::default()
        }
    }

    /// Default K-factor with strict score validation
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| EloError::ConfigurationError {
            message: format!("Invalid Elo configuration: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| EloError::ConfigurationError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.k_factor.is_finite() {
            return Err(EloError::ConfigurationError {
                message: "K-factor must be finite".to_string(),
            }
            .into());
        }

        if self.k_factor <= 0.0 {
            return Err(EloError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EloConfig::default();
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.validation, ValidationMode::Permissive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(EloConfig::with_k_factor(16.0).k_factor, 16.0);
        assert_eq!(
            EloConfig::with_k_factor(16.0).validation,
            ValidationMode::Permissive
        );

        let strict = EloConfig::strict();
        assert_eq!(strict.k_factor, DEFAULT_K_FACTOR);
        assert_eq!(strict.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_config_validation() {
        assert!(EloConfig::with_k_factor(0.0).validate().is_err());
        assert!(EloConfig::with_k_factor(-8.0).validate().is_err());
        assert!(EloConfig::with_k_factor(f64::NAN).validate().is_err());
        assert!(EloConfig::with_k_factor(f64::INFINITY).validate().is_err());
        assert!(EloConfig::with_k_factor(0.5).validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = EloConfig::from_toml_str(
            r#"
            k_factor = 24.0
            validation = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(config.k_factor, 24.0);
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_from_toml_str_fills_defaults() {
        let config = EloConfig::from_toml_str("").unwrap();
        assert_eq!(config, EloConfig::default());

        let config = EloConfig::from_toml_str("k_factor = 10.0").unwrap();
        assert_eq!(config.k_factor, 10.0);
        assert_eq!(config.validation, ValidationMode::Permissive);
    }

    #[test]
    fn test_from_toml_str_rejects_invalid() {
        let err = EloConfig::from_toml_str("k_factor = -1.0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EloError>(),
            Some(EloError::ConfigurationError { .. })
        ));

        assert!(EloConfig::from_toml_str("validation = \"lenient\"").is_err());
        assert!(EloConfig::from_toml_str("k_factor = \"fast\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "elo-rating-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "k_factor = 16.0\n").unwrap();

        let config = EloConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.k_factor, 16.0);
    }

    #[test]
    fn test_from_missing_file() {
        let err = EloConfig::from_file("/nonexistent/elo-rating.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
