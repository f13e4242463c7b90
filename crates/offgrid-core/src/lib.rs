//! # offgrid-core: Pure Sizing Logic for Off-Grid Solar
//!
//! This crate sizes the components of an off-grid solar power system:
//! battery bank, battery cable, fuse, solar array and charge controller.
//! Every calculation is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Offgrid Sizing Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (form UI)                          │   │
//! │  │    Load ──► Battery ──► Array ──► Controller ──► Cable/Fuse    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ text fields                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ offgrid-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  system   │  │  battery  │  │   cable   │  │  numeric  │  │   │
//! │  │   │  facade   │  │  DoD      │  │  AWG      │  │  maybe    │  │   │
//! │  │   │  plan     │  │  derating │  │  table    │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`system`] - The five form calculations and the full sizing plan
//! - [`battery`] - Battery chemistries and Depth of Discharge derating
//! - [`cable`] - AWG wire gauge table
//! - [`numeric`] - Text → number parsing and safe division
//! - [`maybe`] - Present-or-absent result values
//! - [`config`] - Rounding increments and safety factors
//! - [`types`] - Request/plan objects exchanged with the front end
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same text in, same number out
//! 2. **Safe Defaults**: Bad input sizes to 0 or "Not available", never panics
//! 3. **Diagnostics, not errors**: Failures are logged through `tracing`
//! 4. **Fixed Tables**: Lookup data is compile-time constant
//!
//! ## Example Usage
//!
//! ```rust
//! use offgrid_core::{battery_capacity, fuse_size_amperage, get_wire_gauge};
//!
//! // 100 W for 5 hours a day, 2 days of backup, lead-acid (50% DoD)
//! assert_eq!(battery_capacity("leadacid", "100", "5", "2"), 2000);
//!
//! // 125% of a 20 A load, in 5 A steps
//! assert_eq!(fuse_size_amperage("20"), 25);
//!
//! // 6 ft of cable at 5 A
//! assert_eq!(get_wire_gauge("6", "5"), "16 (1.5 mm²)");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod battery;
pub mod cable;
pub mod config;
pub mod error;
pub mod maybe;
pub mod numeric;
pub mod system;
pub mod types;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use offgrid_core::Battery` instead of
// `use offgrid_core::battery::Battery`

pub use battery::{create_battery, Battery, BatteryChemistry, DepthOfDischarge};
pub use cable::{
    current_options, current_options_with, get_wire_gauge, length_options, length_options_with,
    lookup_wire_gauge, WireGauge,
};
pub use config::SizingConfig;
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use maybe::Maybe;
pub use numeric::{in_range, safe_divide, to_float, to_int};
pub use system::{
    battery_capacity, capacity_in_amp_hours, fuse_size_amperage, solar_array_wattage,
    solar_controller_amperage, SolarPowerSystem,
};
pub use types::*;
