//! # Sizing Configuration
//!
//! Rounding increments and safety factors used by the system facade.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. JSON document supplied by the host (SizingConfig::from_json)       │
//! │     Missing fields fall back to the defaults below                     │
//! │                                                                         │
//! │  2. Default Values                                                     │
//! │     fuse ×1.25 in 5 A steps, array in 50 W steps,                      │
//! │     charge controller in 20 A steps                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Format
//! ```json
//! {
//!   "fuse_safety_factor": 1.25,
//!   "fuse_increment_amps": 5,
//!   "array_increment_watts": 50,
//!   "controller_increment_amps": 20
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};

// =============================================================================
// Sizing Config
// =============================================================================

/// Rounding rules for the facade calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizingConfig {
    /// Fuse rating as a multiple of the load current.
    /// Default: 1.25 (125% of the load)
    #[serde(default = "default_fuse_safety_factor")]
    pub fuse_safety_factor: f64,

    /// Fuse ratings are rounded up to a multiple of this (amps).
    #[serde(default = "default_fuse_increment")]
    pub fuse_increment_amps: u32,

    /// Array wattage is rounded up to a multiple of this (watts).
    #[serde(default = "default_array_increment")]
    pub array_increment_watts: u32,

    /// Charge controller ratings are rounded up to a multiple of this (amps).
    #[serde(default = "default_controller_increment")]
    pub controller_increment_amps: u32,
}

fn default_fuse_safety_factor() -> f64 {
    1.25
}

fn default_fuse_increment() -> u32 {
    5
}

fn default_array_increment() -> u32 {
    50
}

fn default_controller_increment() -> u32 {
    20
}

impl Default for SizingConfig {
    fn default() -> Self {
        SizingConfig {
            fuse_safety_factor: default_fuse_safety_factor(),
            fuse_increment_amps: default_fuse_increment(),
            array_increment_watts: default_array_increment(),
            controller_increment_amps: default_controller_increment(),
        }
    }
}

impl SizingConfig {
    /// Checks the config for values that would break the rounding rules.
    ///
    /// ## Rules
    /// - `fuse_safety_factor` must be a finite number >= 1.0
    /// - Every increment must be positive
    pub fn validate(&self) -> ValidationResult<()> {
        if !self.fuse_safety_factor.is_finite() || self.fuse_safety_factor < 1.0 {
            return Err(ValidationError::TooSmall {
                field: "fuse_safety_factor".to_string(),
                min: 1.0,
            });
        }

        let increments = [
            ("fuse_increment_amps", self.fuse_increment_amps),
            ("array_increment_watts", self.array_increment_watts),
            ("controller_increment_amps", self.controller_increment_amps),
        ];
        for (field, value) in increments {
            if value == 0 {
                return Err(ValidationError::MustBePositive {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Reads a config from JSON and validates it.
    ///
    /// ## Example
    /// ```rust
    /// use offgrid_core::config::SizingConfig;
    ///
    /// let config = SizingConfig::from_json(r#"{ "array_increment_watts": 100 }"#).unwrap();
    /// assert_eq!(config.array_increment_watts, 100);
    /// assert_eq!(config.fuse_increment_amps, 5);
    ///
    /// assert!(SizingConfig::from_json(r#"{ "fuse_increment_amps": 0 }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: SizingConfig =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        debug!(?config, "Loaded sizing config");
        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SizingConfig::default();
        assert_eq!(config.fuse_safety_factor, 1.25);
        assert_eq!(config.fuse_increment_amps, 5);
        assert_eq!(config.array_increment_watts, 50);
        assert_eq!(config.controller_increment_amps, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SizingConfig::from_json("{}").unwrap();
        assert_eq!(config, SizingConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = SizingConfig::from_json(r#"{ "fuse_safety_factor": 1.5 }"#).unwrap();
        assert_eq!(config.fuse_safety_factor, 1.5);
        assert_eq!(config.controller_increment_amps, 20);
    }

    #[test]
    fn test_malformed_json() {
        let err = SizingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_invalid_values() {
        let config = SizingConfig {
            fuse_safety_factor: 0.8,
            ..SizingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::TooSmall { .. }));
        assert_eq!(err.to_string(), "fuse_safety_factor must be at least 1");

        let config = SizingConfig {
            fuse_safety_factor: f64::NAN,
            ..SizingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TooSmall { .. })
        ));

        let err = SizingConfig::from_json(r#"{ "controller_increment_amps": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }
}
