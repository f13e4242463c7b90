//! # Domain Types
//!
//! Objects exchanged with the front end.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │   SizingRequest     │            │     SizingPlan      │            │
//! │  │  ─────────────────  │  plan()    │  ─────────────────  │            │
//! │  │  chemistry          │ ─────────► │  battery_wh         │            │
//! │  │  load_watts         │            │  battery_ah         │            │
//! │  │  hours_per_day      │            │  array_watts        │            │
//! │  │  backup_days        │            │  controller_amps    │            │
//! │  │  system_voltage     │            │  fuse_amps          │            │
//! │  │  sun_hours          │            │  wire_gauge         │            │
//! │  │  cable_length_ft    │            │                     │            │
//! │  │  (all text)         │            │  (numbers + label)  │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Request fields stay as text: the form submits strings and the calculators
//! own the text → number conversion.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Sizing Request
// =============================================================================

/// Everything the sizing form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizingRequest {
    /// Battery chemistry identifier ("lithium", "leadacid").
    pub chemistry: String,

    /// Total load in watts.
    pub load_watts: String,

    /// Hours of use per day.
    pub hours_per_day: String,

    /// Days the batteries must carry the load without sun.
    pub backup_days: String,

    /// Nominal battery bank voltage (12, 24, 48).
    pub system_voltage: String,

    /// Peak sun hours per day at the site.
    pub sun_hours: String,

    /// One-way cable run in feet, from the length select.
    pub cable_length_ft: String,
}

// =============================================================================
// Sizing Plan
// =============================================================================

/// Component sizes for a request.
///
/// Any value that could not be computed (bad input, division by zero) is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizingPlan {
    /// Battery bank capacity in watt hours.
    pub battery_wh: i64,

    /// Battery bank capacity in amp hours at the system voltage.
    pub battery_ah: i64,

    /// Solar array size in watts.
    pub array_watts: i64,

    /// Charge controller rating in amps.
    pub controller_amps: i64,

    /// Main fuse rating in amps.
    pub fuse_amps: i64,

    /// Battery cable gauge for the controller current, or "Not available".
    pub wire_gauge: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_form_json() {
        let json = r#"{
            "chemistry": "lithium",
            "load_watts": "100",
            "hours_per_day": "5",
            "backup_days": "2",
            "system_voltage": "12",
            "sun_hours": "4",
            "cable_length_ft": "10"
        }"#;
        let request: SizingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.chemistry, "lithium");
        assert_eq!(request.cable_length_ft, "10");
    }

    #[test]
    fn test_plan_serializes_field_names() {
        let plan = SizingPlan {
            battery_wh: 1000,
            battery_ah: 84,
            array_watts: 250,
            controller_amps: 40,
            fuse_amps: 55,
            wire_gauge: "6 (16 mm²)".to_string(),
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["battery_wh"], 1000);
        assert_eq!(value["wire_gauge"], "6 (16 mm²)");
    }
}
