//! # Collision Configuration
//!
//! Tunables for the collision subsystem, loadable from TOML or RON through
//! the [`Config`] trait.
//!
//! ## Settings
//!
//! - **circle_segments**: vertex count used when building circle colliders
//! - **collinear_tolerance**: largest turn-angle sine at which three points
//!   still count as collinear
//! - **log_level**: default `env_logger` filter

use serde::{Serialize, Deserialize};

use crate::physics::collision::primitives::DEFAULT_COLLINEAR_TOLERANCE;
use crate::physics::collision::collider::DEFAULT_CIRCLE_SEGMENTS;

pub use crate::config::{Config, ConfigError};

/// Collision subsystem configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Number of vertices used for circle colliders
    pub circle_segments: usize,
    /// Collinearity band for the orientation predicate
    pub collinear_tolerance: f32,
    /// Default log filter
    pub log_level: String,
}

impl CollisionConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
            log_level: "info".to_string(),
        }
    }

    /// Set the circle vertex count
    pub fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    /// Set the collinearity tolerance
    pub fn with_collinear_tolerance(mut self, tolerance: f32) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.circle_segments == 0 {
            return Err(ConfigError::Invalid(
                "circle_segments must be at least 1".to_string(),
            ));
        }

        if !self.collinear_tolerance.is_finite() || self.collinear_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "collinear_tolerance must be finite and non-negative, got {}",
                self.collinear_tolerance
            )));
        }

        if self.log_level.is_empty() {
            return Err(ConfigError::Invalid("log_level cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CollisionConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("polygon_collider_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = CollisionConfig::default();
        assert_eq!(config.circle_segments, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_segments = CollisionConfig::new().with_circle_segments(0);
        assert!(matches!(zero_segments.validate(), Err(ConfigError::Invalid(_))));

        let negative = CollisionConfig::new().with_collinear_tolerance(-1.0);
        assert!(matches!(negative.validate(), Err(ConfigError::Invalid(_))));

        let nan = CollisionConfig::new().with_collinear_tolerance(f32::NAN);
        assert!(matches!(nan.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("config.toml");
        let config = CollisionConfig::new()
            .with_circle_segments(32)
            .with_log_level("debug");

        config.save_to_file(&path).unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("partial.ron");
        std::fs::write(&path, "(circle_segments: 16)").unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.circle_segments, 16);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = CollisionConfig::new().save_to_file("collision.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
