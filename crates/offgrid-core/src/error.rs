//! # Error Types
//!
//! Domain-specific error types for offgrid-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  offgrid-core errors (this file)                                       │
//! │  ├── CoreError        - Unknown chemistry, bad configuration           │
//! │  └── ValidationError  - Number format and range failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → front end message                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Stop
//! The text-in/number-out calculators never return these errors. They log a
//! diagnostic and fall back to a safe default (0, `Absent`, or the null
//! battery). The typed constructors (`parse_int`, `DepthOfDischarge::new`,
//! `BatteryChemistry::from_str`, `SizingConfig::from_json`) return them for
//! callers that want the condition as a value.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core sizing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Battery chemistry is not in the supported table.
    ///
    /// ## When This Occurs
    /// - The UI submitted a chemistry we have no Depth of Discharge for
    /// - A typo such as `"lithum"`
    #[error("Unknown battery chemistry: {0}")]
    UnknownChemistry(String),

    /// Sizing configuration could not be read.
    #[error("Invalid sizing configuration: {0}")]
    Config(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is below a lower bound (no upper bound applies).
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., text that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
