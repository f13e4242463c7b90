//! # Cable Module
//!
//! Copper battery cable sizing for a 3% voltage drop, following the U.S.
//! Coast Guard AWG table.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AWG Lookup Matrix                                 │
//! │                                                                         │
//! │              current (A) →                                              │
//! │              5   10   15   20  ...  120  150  200                       │
//! │  length  6   16  16   14   14  ...   2    1   00                        │
//! │  (ft)   10   16  14   12   12  ...   2    1   00                        │
//! │    ↓    ..                                                              │
//! │        130    6   2    2    1  ...   --   --   --                       │
//! │                                                                         │
//! │  -- = no gauge in the table ("Not available")                           │
//! │                                                                         │
//! │  Cell encoding: n >= 0 → AWG n                                         │
//! │                 n <  0 → 1 + |n| zeros (-1 → "00", -3 → "0000")        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups are exact: the length and current must be one of the row/column
//! labels. Front ends populate their selects from [`length_options`] and
//! [`current_options`] so free-form values never reach the table.
//!
//! ## Usage
//! ```rust
//! use offgrid_core::cable::get_wire_gauge;
//!
//! assert_eq!(get_wire_gauge("6", "5"), "16 (1.5 mm²)");
//! assert_eq!(get_wire_gauge("130", "200"), "Not available");
//! ```

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::numeric::to_int;

/// Returned when a length/current pair has no gauge.
pub const NOT_AVAILABLE: &str = "Not available";

// =============================================================================
// Lookup Tables
// =============================================================================

/// Row labels: cable length in feet.
const LENGTHS_FT: [u32; 16] = [6, 10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130];

/// Column labels: current flow in amps.
const CURRENTS_A: [u32; 16] = [5, 10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 120, 150, 200];

/// Undefined cell.
const NA: i8 = i8::MIN;

/// Turns a table row into cells, mapping `NA` to `None`.
const fn row(cells: [i8; 16]) -> [Option<i8>; 16] {
    let mut out = [None; 16];
    let mut i = 0;
    while i < cells.len() {
        if cells[i] != NA {
            out[i] = Some(cells[i]);
        }
        i += 1;
    }
    out
}

/// AWG size for every (length, current) pair.
#[rustfmt::skip]
const AWG: [[Option<i8>; 16]; 16] = [
    row([16, 16, 14, 14, 12, 10,  8,  6,  6,  6,  4,  4,  4,  2,  1, -1]),
    row([16, 14, 12, 12, 10, 10,  8,  6,  6,  6,  4,  4,  4,  2,  1, -1]),
    row([16, 12, 10, 10,  8,  8,  6,  6,  4,  4,  4,  2,  2,  2,  1, -1]),
    row([14, 10, 10,  8,  6,  6,  6,  4,  4,  2,  2,  2,  2,  1,  0, -1]),
    row([12, 10,  8,  6,  6,  6,  4,  4,  2,  2,  2,  1,  1,  0, -1, -2]),
    row([12, 10,  8,  6,  6,  4,  4,  2,  2,  1,  1,  0,  0, -1, -2, -3]),
    row([10,  8,  6,  6,  4,  4,  2,  2,  1,  0,  0, -1, -1, -2, -3, -3]),
    row([10,  6,  6,  4,  4,  2,  2,  1,  0, -1, -2, -2, -2, -3, -3, NA]),
    row([10,  6,  6,  4,  2,  2,  1,  0, -1, -2, -2, -3, -3, -3, NA, NA]),
    row([ 8,  6,  4,  2,  2,  1,  0, -1, -2, -2, -3, -3, NA, NA, NA, NA]),
    row([ 8,  6,  4,  2,  2,  1,  0, -1, -2, -3, -3, NA, NA, NA, NA, NA]),
    row([ 8,  4,  2,  2,  1,  0, -1, -2, -3, -3, NA, NA, NA, NA, NA, NA]),
    row([ 6,  4,  2,  2,  1,  0, -1, -2, -3, NA, NA, NA, NA, NA, NA, NA]),
    row([ 6,  4,  2,  1,  0,  0, -2, -3, -3, NA, NA, NA, NA, NA, NA, NA]),
    row([ 6,  4,  2,  1,  0, -1, -2, -3, NA, NA, NA, NA, NA, NA, NA, NA]),
    row([ 6,  2,  2,  1,  0, -1, -2, -3, NA, NA, NA, NA, NA, NA, NA, NA]),
];

/// Closest metric cross-section (mm²) for an AWG size.
fn metric_mm2(awg: i8) -> Option<f64> {
    let mm2 = match awg {
        16 => 1.5,
        14 => 2.5,
        12 => 4.0,
        10 => 6.0,
        8 => 10.0,
        6 => 16.0,
        4 => 25.0,
        2 => 35.0,
        1 => 50.0,
        0 => 60.0,
        -1 => 70.0,
        -2 => 95.0,
        -3 => 120.0,
        _ => return None,
    };
    Some(mm2)
}

// =============================================================================
// Wire Gauge
// =============================================================================

/// A wire size taken from the AWG table.
///
/// Built only by the table lookup or `TryFrom<i8>`, so every value
/// has a metric equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct WireGauge(i8);

impl WireGauge {
    /// Raw table value; negative values are sizes below 0 AWG.
    #[inline]
    pub const fn awg(&self) -> i8 {
        self.0
    }

    /// Metric cross-section in mm².
    pub fn metric_mm2(&self) -> f64 {
        metric_mm2(self.0).unwrap_or_default()
    }

    /// The AWG part of the label, without the metric suffix.
    pub fn awg_label(&self) -> String {
        if self.0 >= 0 {
            self.0.to_string()
        } else {
            "0".repeat(1 + self.0.unsigned_abs() as usize)
        }
    }
}

impl TryFrom<i8> for WireGauge {
    type Error = ValidationError;

    /// Accepts only sizes that appear in the table.
    ///
    /// ## Example
    /// ```rust
    /// use offgrid_core::cable::WireGauge;
    ///
    /// assert_eq!(WireGauge::try_from(-2_i8).unwrap().to_string(), "000 (95 mm²)");
    /// assert!(WireGauge::try_from(3_i8).is_err());
    /// ```
    fn try_from(awg: i8) -> Result<Self, Self::Error> {
        match metric_mm2(awg) {
            Some(_) => Ok(WireGauge(awg)),
            None => Err(ValidationError::InvalidFormat {
                field: "wire gauge".to_string(),
                reason: format!("{awg} is not a table size"),
            }),
        }
    }
}

/// Renders as `"<awg> (<mm> mm²)"`, e.g. `"16 (1.5 mm²)"` or `"000 (95 mm²)"`.
impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} mm²)", self.awg_label(), self.metric_mm2())
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Looks up the gauge for an exact table length and current.
///
/// Returns `None` when either value is not a table label, or the table has no
/// gauge for the pair.
///
/// ## Example
/// ```rust
/// use offgrid_core::cable::lookup_wire_gauge;
///
/// let gauge = lookup_wire_gauge(25, 150).unwrap();
/// assert_eq!(gauge.awg(), -1);
/// assert_eq!(gauge.to_string(), "00 (70 mm²)");
///
/// assert!(lookup_wire_gauge(26, 150).is_none());
/// ```
pub fn lookup_wire_gauge(length_ft: i64, amperage: i64) -> Option<WireGauge> {
    let m = LENGTHS_FT.iter().position(|&ft| i64::from(ft) == length_ft)?;
    let n = CURRENTS_A.iter().position(|&a| i64::from(a) == amperage)?;
    AWG[m][n].map(WireGauge)
}

/// Returns the wire gauge label for a cable length and load current.
///
/// ## User Workflow
/// ```text
/// Length select: "50" ft   Current select: "100" A
///      │
///      ▼
/// get_wire_gauge("50", "100") ← THIS FUNCTION
///      │
///      ├── not a table label / empty cell → "Not available"
///      │
///      └── "000 (95 mm²)"
/// ```
pub fn get_wire_gauge(length_ft: &str, amperage: &str) -> String {
    match lookup_wire_gauge(to_int(length_ft), to_int(amperage)) {
        Some(gauge) => gauge.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

// =============================================================================
// Options
// =============================================================================

/// Cable length options in feet, ascending.
#[inline]
pub fn length_options() -> &'static [u32] {
    &LENGTHS_FT
}

/// Cable length options passed through `f`.
///
/// ## Example
/// ```rust
/// use offgrid_core::cable::length_options_with;
///
/// let labels = length_options_with(|ft| format!("{ft} ft"));
/// assert_eq!(labels[0], "6 ft");
/// ```
pub fn length_options_with<T, F>(f: F) -> Vec<T>
where
    F: FnMut(u32) -> T,
{
    LENGTHS_FT.iter().copied().map(f).collect()
}

/// Current options in amps, ascending.
#[inline]
pub fn current_options() -> &'static [u32] {
    &CURRENTS_A
}

/// Current options passed through `f`.
pub fn current_options_with<T, F>(f: F) -> Vec<T>
where
    F: FnMut(u32) -> T,
{
    CURRENTS_A.iter().copied().map(f).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
