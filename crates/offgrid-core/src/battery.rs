//! # Battery Module
//!
//! Battery bank sizing with Depth of Discharge (DoD) derating.
//!
//! ## Why Derate?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DEPTH OF DISCHARGE                                                     │
//! │                                                                         │
//! │  Lithium   DoD 100%  → the whole bank is usable   → multiplier 1       │
//! │  Lead-acid DoD  50%  → only half is usable        → multiplier 2       │
//! │                                                                         │
//! │  Discharging past the DoD shortens battery life, so the nominal        │
//! │  capacity has to grow by 100 / DoD to cover the same load.             │
//! │                                                                         │
//! │  Wh = round(watts × hours × backup_days × 100 / DoD)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use offgrid_core::battery::create_battery;
//!
//! // 100 W load, 5 h/day, 2 days of backup
//! assert_eq!(create_battery("lithium").capacity(100, 5, 2), 1000);
//! assert_eq!(create_battery("leadacid").capacity(100, 5, 2), 2000);
//!
//! // Unknown chemistry never fails, it sizes nothing
//! assert_eq!(create_battery("nickel").capacity(100, 5, 2), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError, ValidationResult};
use crate::numeric::in_range;

// =============================================================================
// Battery Chemistry
// =============================================================================

/// Supported battery chemistries.
///
/// The serialized names are the identifiers the front end submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BatteryChemistry {
    /// Lithium iron phosphate and similar, fully dischargeable.
    Lithium,
    /// Flooded or sealed lead-acid.
    LeadAcid,
}

impl BatteryChemistry {
    /// All chemistries, in the order the front end lists them.
    pub const ALL: [BatteryChemistry; 2] = [BatteryChemistry::Lithium, BatteryChemistry::LeadAcid];

    /// Discharge percentage for the longest possible lifespan.
    pub const fn depth_of_discharge(&self) -> DepthOfDischarge {
        match self {
            BatteryChemistry::Lithium => DepthOfDischarge(100),
            BatteryChemistry::LeadAcid => DepthOfDischarge(50),
        }
    }

    /// Identifier used by the front end.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BatteryChemistry::Lithium => "lithium",
            BatteryChemistry::LeadAcid => "leadacid",
        }
    }
}

impl fmt::Display for BatteryChemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatteryChemistry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatteryChemistry::ALL
            .into_iter()
            .find(|chemistry| chemistry.as_str() == s)
            .ok_or_else(|| CoreError::UnknownChemistry(s.to_string()))
    }
}

// =============================================================================
// Depth of Discharge
// =============================================================================

/// Usable share of a battery's capacity, in whole percent (1-100).
///
/// Built only through [`DepthOfDischarge::new`] or the chemistry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct DepthOfDischarge(u8);

impl DepthOfDischarge {
    /// Creates a DoD from a percentage.
    ///
    /// ## Rules
    /// - Must be between 1 and 100 inclusive
    ///
    /// ## Example
    /// ```rust
    /// use offgrid_core::battery::DepthOfDischarge;
    ///
    /// assert_eq!(DepthOfDischarge::new(80).unwrap().percent(), 80);
    /// assert!(DepthOfDischarge::new(0).is_err());
    /// assert!(DepthOfDischarge::new(101).is_err());
    /// ```
    pub fn new(percent: i64) -> ValidationResult<Self> {
        if !in_range(percent, 1, 100) {
            return Err(ValidationError::OutOfRange {
                field: "depth of discharge".to_string(),
                min: 1,
                max: 100,
            });
        }
        Ok(DepthOfDischarge(percent as u8))
    }

    /// Returns the percentage.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Capacity inflation needed to stay within this DoD: `100 / DoD`.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        100.0 / f64::from(self.0)
    }
}

// =============================================================================
// Battery
// =============================================================================

/// A battery bank calculator.
///
/// `Null` is what an unknown chemistry resolves to: it sizes every load as 0
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Battery {
    /// A real battery with a known Depth of Discharge.
    Solar { depth_of_discharge: DepthOfDischarge },
    /// No battery; capacity is always 0.
    Null,
}

impl Battery {
    /// Battery for a known chemistry.
    pub const fn for_chemistry(chemistry: BatteryChemistry) -> Self {
        Battery::Solar {
            depth_of_discharge: chemistry.depth_of_discharge(),
        }
    }

    /// Battery for an arbitrary DoD percentage.
    ///
    /// Fails when the DoD is outside 1-100.
    pub fn with_depth_of_discharge(percent: i64) -> ValidationResult<Self> {
        Ok(Battery::Solar {
            depth_of_discharge: DepthOfDischarge::new(percent)?,
        })
    }

    /// Returns true for the null battery.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Battery::Null)
    }

    /// Derating multiplier (0.0 for the null battery).
    pub fn multiplier(&self) -> f64 {
        match self {
            Battery::Solar { depth_of_discharge } => depth_of_discharge.multiplier(),
            Battery::Null => 0.0,
        }
    }

    /// Required capacity in watt hours for a load.
    ///
    /// ## Arguments
    /// * `watts` - Load
    /// * `hours` - Hours of use per day
    /// * `backup_days` - Days the bank must carry the load without sun
    ///
    /// Rounds to the nearest watt hour.
    pub fn capacity(&self, watts: i64, hours: i64, backup_days: i64) -> i64 {
        match self {
            Battery::Solar { depth_of_discharge } => {
                let wh = watts as f64 * hours as f64 * backup_days as f64;
                (wh * depth_of_discharge.multiplier()).round() as i64
            }
            Battery::Null => 0,
        }
    }
}

impl From<BatteryChemistry> for Battery {
    fn from(chemistry: BatteryChemistry) -> Self {
        Battery::for_chemistry(chemistry)
    }
}

/// Creates the battery calculator for a chemistry identifier.
///
/// Unknown identifiers log a diagnostic and yield [`Battery::Null`].
pub fn create_battery(chemistry: &str) -> Battery {
    match chemistry.parse::<BatteryChemistry>() {
        Ok(chemistry) => Battery::for_chemistry(chemistry),
        Err(e) => {
            warn!(chemistry = %chemistry, error = %e, "Unknown battery type");
            Battery::Null
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
