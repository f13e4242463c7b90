//! # Numeric Module
//!
//! Text → number conversion, range checks and safe division.
//!
//! ## Parsing Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Layers of Parsing                              │
//! │                                                                         │
//! │  parse_int / parse_float   → ValidationResult<_>                        │
//! │  ├── Reads the longest numeric PREFIX ("12V" → 12, "3.7" → 3)           │
//! │  └── No digits at all → ValidationError::InvalidFormat                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  to_int / to_float         → plain number                               │
//! │  ├── Ok(n)  → n                                                         │
//! │  └── Err(_) → warn! diagnostic, then 0                                 │
//! │                                                                         │
//! │  Form fields are sized by the calculators, not rejected: a bad field  │
//! │  becomes 0 and the result degrades to 0 instead of failing.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use offgrid_core::numeric::{safe_divide, to_int};
//!
//! assert_eq!(to_int("42"), 42);
//! assert_eq!(to_int("24V"), 24);
//! assert_eq!(to_int("abc"), 0);
//!
//! assert!(safe_divide(10.0, 0.0).is_absent());
//! assert_eq!(safe_divide(10.0, 2.0).get_or_else(-1.0), 5.0);
//! ```

use tracing::warn;

use crate::error::{ValidationError, ValidationResult};
use crate::maybe::Maybe;

// =============================================================================
// Integer Parsing
// =============================================================================

/// Parses the base-10 integer prefix of `text`.
///
/// ## Rules
/// - Leading whitespace is skipped
/// - An optional `+` or `-` sign is accepted
/// - Digits are read up to the first non-digit, the rest is ignored
/// - At least one digit is required
///
/// ## Example
/// ```rust
/// use offgrid_core::numeric::parse_int;
///
/// assert_eq!(parse_int(" 12 volts").unwrap(), 12);
/// assert_eq!(parse_int("-7").unwrap(), -7);
/// assert_eq!(parse_int("3.9").unwrap(), 3);
/// assert!(parse_int("volts").is_err());
/// ```
pub fn parse_int(text: &str) -> ValidationResult<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return Err(ValidationError::InvalidFormat {
            field: "integer".to_string(),
            reason: format!("'{}' does not start with a number", text),
        });
    }

    trimmed[..end]
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "integer".to_string(),
            reason: e.to_string(),
        })
}

/// Converts a numeric string to an integer, falling back to 0.
///
/// A diagnostic is logged once when `text` holds no number.
pub fn to_int(text: &str) -> i64 {
    parse_int(text).unwrap_or_else(|e| {
        warn!(input = %text, error = %e, "Not a number");
        0
    })
}

// =============================================================================
// Float Parsing
// =============================================================================

/// Parses the longest floating-point prefix of `text`.
///
/// Accepts an optional sign, digits with an optional fractional part, an
/// optional exponent (`e`/`E`, only when followed by digits) and `Infinity`.
///
/// ## Example
/// ```rust
/// use offgrid_core::numeric::parse_float;
///
/// assert_eq!(parse_float("12.5").unwrap(), 12.5);
/// assert_eq!(parse_float(".5A").unwrap(), 0.5);
/// assert_eq!(parse_float("1.5e2W").unwrap(), 150.0);
/// assert_eq!(parse_float("3e").unwrap(), 3.0);
/// assert!(parse_float("-").is_err());
/// ```
pub fn parse_float(text: &str) -> ValidationResult<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }

    if mantissa_digits == 0 {
        return Err(ValidationError::InvalidFormat {
            field: "number".to_string(),
            reason: format!("'{}' does not start with a number", text),
        });
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "number".to_string(),
            reason: e.to_string(),
        })
}

/// Converts a numeric string to a float, falling back to 0.0.
///
/// A diagnostic is logged once when `text` holds no number.
pub fn to_float(text: &str) -> f64 {
    parse_float(text).unwrap_or_else(|e| {
        warn!(input = %text, error = %e, "Not a number");
        0.0
    })
}

// =============================================================================
// Range & Division
// =============================================================================

/// Inclusive range test: `min <= x <= max`.
///
/// ## Example
/// ```rust
/// use offgrid_core::numeric::in_range;
///
/// assert!(in_range(1, 1, 100));
/// assert!(in_range(100, 1, 100));
/// assert!(!in_range(0, 1, 100));
/// ```
#[inline]
pub fn in_range<T: PartialOrd>(x: T, min: T, max: T) -> bool {
    x >= min && x <= max
}

/// Divides `a` by `b`, or returns `Absent` when `b` is zero.
///
/// Division is real-valued; rounding is up to the caller.
pub fn safe_divide(a: f64, b: f64) -> Maybe<f64> {
    if b == 0.0 {
        warn!(dividend = a, "Division by zero");
        return Maybe::Absent;
    }
    Maybe::Present(a / b)
}

// =============================================================================
// Unit Tests
// =============================================================================
