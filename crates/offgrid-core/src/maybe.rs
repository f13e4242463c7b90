//! # Maybe Module
//!
//! A present-or-absent value for calculations that can fail to produce a
//! meaningful number.
//!
//! ## Why Not Just Return 0?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE DIVISION PROBLEM                                                   │
//! │                                                                         │
//! │  Array watts  = capacity_wh / sun_hours                                 │
//! │  Amp hours    = capacity_wh / voltage                                   │
//! │  Controller A = watts / voltage                                         │
//! │                                                                         │
//! │  A blank form field parses to 0 → every one of these divides by 0.     │
//! │                                                                         │
//! │  OUR SOLUTION: safe_divide → Maybe                                     │
//! │    safe_divide(1000, 0)   → Absent                                     │
//! │       .map(round_up_50)   → Absent   (rounding never runs)             │
//! │       .get_or_else(0.0)   → 0        (the caller picks the fallback)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use offgrid_core::maybe::Maybe;
//!
//! let amps = Maybe::Present(12.5_f64).map(f64::ceil).get_or_else(0.0);
//! assert_eq!(amps, 13.0);
//!
//! let nothing: Maybe<f64> = Maybe::Absent;
//! assert_eq!(nothing.map(f64::ceil).get_or_else(0.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Maybe Type
// =============================================================================

/// Either a computed value or nothing.
///
/// Immutable once built: `is_present`/`is_absent` never change for a given
/// value. Serialized as `{"present": 12.5}` or `"absent"` so the front end can
/// tell a real 0 from a failed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Maybe<T> {
    /// A computed value.
    Present(T),
    /// No meaningful value (e.g. division by zero).
    Absent,
}

impl<T> Maybe<T> {
    /// Returns true if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns true if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Transforms the value, if any.
    ///
    /// `f` is never invoked on `Absent`.
    ///
    /// ## Example
    /// ```rust
    /// use offgrid_core::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(2).map(|x| x * 10), Maybe::Present(20));
    /// assert_eq!(Maybe::<i32>::Absent.map(|x| x * 10), Maybe::Absent);
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that can itself be absent.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the value, or computes a fallback when absent.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default(),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_present_and_absent_are_exclusive() {
        let present = Maybe::Present(5.0);
        assert!(present.is_present());
        assert!(!present.is_absent());

        let absent: Maybe<f64> = Maybe::Absent;
        assert!(absent.is_absent());
        assert!(!absent.is_present());
    }

    #[test]
    fn test_map_present() {
        let doubled = Maybe::Present(21).map(|x| x * 2);
        assert_eq!(doubled, Maybe::Present(42));
    }

    #[test]
    fn test_map_absent_never_calls_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Absent.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_then() {
        let half = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent };
        assert_eq!(Maybe::Present(8).and_then(half), Maybe::Present(4));
        assert_eq!(Maybe::Present(7).and_then(half), Maybe::Absent);
        assert_eq!(Maybe::Absent.and_then(half), Maybe::Absent);
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Maybe::Present(7).get_or_else(0), 7);
        assert_eq!(Maybe::Absent.get_or_else(0), 0);
        assert_eq!(Maybe::<i32>::Absent.get_or_else_with(|| -1), -1);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some(3)), Maybe::Present(3));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Absent);

        let back: Option<i32> = Maybe::Present(3).into();
        assert_eq!(back, Some(3));
        assert_eq!(Maybe::<i32>::default().into_option(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Maybe::Present(12.5)).unwrap();
        assert_eq!(json, r#"{"present":12.5}"#);

        let json = serde_json::to_string(&Maybe::<f64>::Absent).unwrap();
        assert_eq!(json, r#""absent""#);
    }
}
