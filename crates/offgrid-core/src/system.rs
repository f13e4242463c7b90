//! # System Module
//!
//! The calculations the sizing form offers, composed from the battery, cable
//! and numeric modules.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      From Form to Component Size                        │
//! │                                                                         │
//! │  "1000", "12"  ──► to_int ──► 1000, 12                                  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                      safe_divide(1000, 12) → Present(83.3)              │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                      .map(ceil) → Present(84)                           │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                      .get_or_else(0) → 84 Ah                            │
//! │                                                                         │
//! │  Voltage "0" or "abc" → Absent → 0 Ah (never a panic, never NaN)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rules (default config)
//! | Calculation        | Formula                      | Rounded up to |
//! |--------------------|------------------------------|---------------|
//! | Fuse               | amps × 1.25                  | 5 A           |
//! | Amp hours          | Wh ÷ V                       | 1 Ah          |
//! | Solar array        | Wh ÷ sun hours               | 50 W          |
//! | Charge controller  | W ÷ V                        | 20 A          |
//! | Battery            | see [`crate::battery`]       | nearest Wh    |
//!
//! ## Usage
//! ```rust
//! use offgrid_core::system;
//!
//! assert_eq!(system::fuse_size_amperage("44"), 55);
//! assert_eq!(system::capacity_in_amp_hours("1000", "12"), 84);
//! assert_eq!(system::solar_array_wattage("1000", "3"), 350);
//! assert_eq!(system::solar_controller_amperage("250", "12"), 40);
//! assert_eq!(system::battery_capacity("leadacid", "100", "5", "2"), 2000);
//! ```

use tracing::debug;

use crate::battery::create_battery;
use crate::cable::{current_options, lookup_wire_gauge, NOT_AVAILABLE};
use crate::config::SizingConfig;
use crate::maybe::Maybe;
use crate::numeric::{safe_divide, to_int};
use crate::types::{SizingPlan, SizingRequest};

/// Rounds `x` up to the next multiple of `increment`, never below 0.
#[inline]
fn round_up_to(x: f64, increment: u32) -> f64 {
    let increment = f64::from(increment);
    ((x / increment).ceil() * increment).max(0.0)
}

// =============================================================================
// Solar Power System
// =============================================================================

/// Sizing calculator for an off-grid solar system.
///
/// Holds only the rounding rules; every method is a pure function of its
/// arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolarPowerSystem {
    config: SizingConfig,
}

impl SolarPowerSystem {
    /// Creates a calculator with custom rounding rules.
    pub fn new(config: SizingConfig) -> Self {
        SolarPowerSystem { config }
    }

    /// Returns the rounding rules in use.
    #[inline]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Numeric calculations
    // -------------------------------------------------------------------------

    /// Fuse rating for a load current: 125% of the load, rounded up to 5 A.
    /// Negative currents rate as 0.
    pub fn fuse_amps(&self, load_amps: i64) -> i64 {
        let amps = load_amps as f64 * self.config.fuse_safety_factor;
        round_up_to(amps, self.config.fuse_increment_amps) as i64
    }

    /// Converts watt hours to amp hours, rounded up. 0 when `voltage` is 0.
    pub fn amp_hours(&self, capacity_wh: i64, voltage: i64) -> i64 {
        safe_divide(capacity_wh as f64, voltage as f64)
            .map(f64::ceil)
            .get_or_else(0.0) as i64
    }

    /// Array size for a daily energy need, rounded up to 50 W. 0 when `hours`
    /// is 0.
    pub fn array_watts(&self, capacity_wh: i64, hours: i64) -> i64 {
        self.array_rating(capacity_wh, hours).get_or_else(0)
    }

    /// Charge controller rating, rounded up to 20 A. 0 when `voltage` is 0.
    pub fn controller_amps(&self, watts: i64, voltage: i64) -> i64 {
        self.controller_rating(watts, voltage).get_or_else(0)
    }

    fn array_rating(&self, capacity_wh: i64, hours: i64) -> Maybe<i64> {
        let increment = self.config.array_increment_watts;
        safe_divide(capacity_wh as f64, hours as f64)
            .map(|watts| round_up_to(watts, increment) as i64)
    }

    fn controller_rating(&self, watts: i64, voltage: i64) -> Maybe<i64> {
        let increment = self.config.controller_increment_amps;
        safe_divide(watts as f64, voltage as f64)
            .map(|amps| round_up_to(amps, increment) as i64)
    }

    // -------------------------------------------------------------------------
    // Form entry points (text in, number out)
    // -------------------------------------------------------------------------

    /// Returns fuse size amperage for a load current.
    pub fn fuse_size_amperage(&self, amperage: &str) -> i64 {
        self.fuse_amps(to_int(amperage))
    }

    /// Returns battery capacity in amp hours.
    pub fn capacity_in_amp_hours(&self, capacity_wh: &str, voltage: &str) -> i64 {
        self.amp_hours(to_int(capacity_wh), to_int(voltage))
    }

    /// Returns solar array wattage.
    pub fn solar_array_wattage(&self, capacity_wh: &str, hours: &str) -> i64 {
        self.array_watts(to_int(capacity_wh), to_int(hours))
    }

    /// Returns solar charge controller amperage.
    pub fn solar_controller_amperage(&self, watts: &str, voltage: &str) -> i64 {
        self.controller_amps(to_int(watts), to_int(voltage))
    }

    /// Returns battery capacity in watt hours.
    pub fn battery_capacity(&self, chemistry: &str, watts: &str, hours: &str, backup_days: &str) -> i64 {
        create_battery(chemistry).capacity(to_int(watts), to_int(hours), to_int(backup_days))
    }

    // -------------------------------------------------------------------------
    // Full plan
    // -------------------------------------------------------------------------

    /// Sizes every component for a form submission.
    ///
    /// ## Workflow
    /// ```text
    /// load × hours × backup (DoD derated) ──► battery_wh ──► battery_ah
    /// load × hours ÷ sun hours             ──► array_watts
    /// array_watts ÷ voltage                ──► controller_amps
    /// controller_amps × 1.25               ──► fuse_amps
    /// controller_amps → next current option, cable length → wire_gauge
    /// ```
    ///
    /// When the controller current cannot be computed (missing or zero
    /// voltage or sun hours) the cable is `"Not available"`.
    ///
    /// ## Example
    /// ```rust
    /// use offgrid_core::system::SolarPowerSystem;
    /// use offgrid_core::types::SizingRequest;
    ///
    /// let request = SizingRequest {
    ///     chemistry: "lithium".to_string(),
    ///     load_watts: "100".to_string(),
    ///     hours_per_day: "5".to_string(),
    ///     backup_days: "2".to_string(),
    ///     system_voltage: "12".to_string(),
    ///     sun_hours: "4".to_string(),
    ///     cable_length_ft: "10".to_string(),
    /// };
    /// let plan = SolarPowerSystem::default().plan(&request);
    /// assert_eq!(plan.battery_wh, 1000);
    /// assert_eq!(plan.battery_ah, 84);
    /// assert_eq!(plan.array_watts, 150);
    /// assert_eq!(plan.controller_amps, 20);
    /// assert_eq!(plan.fuse_amps, 25);
    /// assert_eq!(plan.wire_gauge, "12 (4 mm²)");
    /// ```
    pub fn plan(&self, request: &SizingRequest) -> SizingPlan {
        let load_watts = to_int(&request.load_watts);
        let hours = to_int(&request.hours_per_day);
        let backup_days = to_int(&request.backup_days);
        let voltage = to_int(&request.system_voltage);
        let sun_hours = to_int(&request.sun_hours);
        let cable_length_ft = to_int(&request.cable_length_ft);

        let battery_wh = create_battery(&request.chemistry).capacity(load_watts, hours, backup_days);
        let battery_ah = self.amp_hours(battery_wh, voltage);

        let daily_wh = load_watts.saturating_mul(hours);
        let array = self.array_rating(daily_wh, sun_hours);
        let controller = array.and_then(|watts| self.controller_rating(watts, voltage));
        let array_watts = array.get_or_else(0);
        let controller_amps = controller.get_or_else(0);
        let fuse_amps = self.fuse_amps(controller_amps);

        // No controller current, no cable size
        let wire_gauge = controller
            .into_option()
            .and_then(|amps| {
                current_options()
                    .iter()
                    .map(|&option| i64::from(option))
                    .find(|&option| option >= amps)
            })
            .and_then(|amps| lookup_wire_gauge(cable_length_ft, amps))
            .map_or_else(|| NOT_AVAILABLE.to_string(), |gauge| gauge.to_string());

        debug!(
            battery_wh,
            battery_ah,
            array_watts,
            controller_amps,
            fuse_amps,
            wire_gauge = %wire_gauge,
            "Sized solar system"
        );

        SizingPlan {
            battery_wh,
            battery_ah,
            array_watts,
            controller_amps,
            fuse_amps,
            wire_gauge,
        }
    }
}

// =============================================================================
// Free Functions (default config)
// =============================================================================

/// Fuse size amperage: `ceil(amperage × 1.25 / 5) × 5`.
pub fn fuse_size_amperage(amperage: &str) -> i64 {
    SolarPowerSystem::default().fuse_size_amperage(amperage)
}

/// Battery capacity in amp hours: `ceil(capacity_wh / voltage)`, or 0.
pub fn capacity_in_amp_hours(capacity_wh: &str, voltage: &str) -> i64 {
    SolarPowerSystem::default().capacity_in_amp_hours(capacity_wh, voltage)
}

/// Solar array wattage in 50 W steps, or 0.
pub fn solar_array_wattage(capacity_wh: &str, hours: &str) -> i64 {
    SolarPowerSystem::default().solar_array_wattage(capacity_wh, hours)
}

/// Charge controller amperage in 20 A steps, or 0.
pub fn solar_controller_amperage(watts: &str, voltage: &str) -> i64 {
    SolarPowerSystem::default().solar_controller_amperage(watts, voltage)
}

/// Battery capacity in watt hours for a chemistry and load.
pub fn battery_capacity(chemistry: &str, watts: &str, hours: &str, backup_days: &str) -> i64 {
    SolarPowerSystem::default().battery_capacity(chemistry, watts, hours, backup_days)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::count_diagnostics;

    fn request(chemistry: &str, watts: &str, voltage: &str, sun: &str, length: &str) -> SizingRequest {
        SizingRequest {
            chemistry: chemistry.to_string(),
            load_watts: watts.to_string(),
            hours_per_day: "5".to_string(),
            backup_days: "2".to_string(),
            system_voltage: voltage.to_string(),
            sun_hours: sun.to_string(),
            cable_length_ft: length.to_string(),
        }
    }

    #[test]
    fn test_fuse_size_amperage() {
        assert_eq!(fuse_size_amperage("0"), 0);
        assert_eq!(fuse_size_amperage("4"), 5);
        assert_eq!(fuse_size_amperage("7"), 10);
        assert_eq!(fuse_size_amperage("20"), 25);
        assert_eq!(fuse_size_amperage("44"), 55);
        assert_eq!(fuse_size_amperage("abc"), 0);
    }

    #[test]
    fn test_fuse_rounding_law() {
        for amps in 0..=500 {
            let fuse = fuse_size_amperage(&amps.to_string());
            assert!(fuse >= 0);
            assert_eq!(fuse % 5, 0, "fuse for {amps} A");
            assert!(fuse as f64 >= amps as f64 * 1.25);
            assert!((fuse as f64) < amps as f64 * 1.25 + 5.0);
        }
    }

    #[test]
    fn test_negative_inputs_rate_as_zero() {
        assert_eq!(fuse_size_amperage("-12"), 0);
        assert_eq!(fuse_size_amperage("-1"), 0);
        assert_eq!(solar_array_wattage("-1000", "4"), 0);
        assert_eq!(solar_controller_amperage("-250", "12"), 0);
        assert_eq!(solar_controller_amperage("250", "-12"), 0);

        for amps in -500..0 {
            let fuse = fuse_size_amperage(&amps.to_string());
            assert_eq!(fuse, 0, "fuse for {amps} A");
        }
    }

    #[test]
    fn test_capacity_in_amp_hours() {
        assert_eq!(capacity_in_amp_hours("1000", "12"), 84);
        assert_eq!(capacity_in_amp_hours("1200", "12"), 100);
        assert_eq!(capacity_in_amp_hours("1", "48"), 1);
        assert_eq!(capacity_in_amp_hours("0", "24"), 0);
    }

    #[test]
    fn test_division_by_zero_defaults_to_zero() {
        let (ah, events) = count_diagnostics(|| capacity_in_amp_hours("1000", "0"));
        assert_eq!(ah, 0);
        assert_eq!(events, 1);

        assert_eq!(solar_array_wattage("1000", "0"), 0);
        assert_eq!(solar_controller_amperage("250", "0"), 0);
        // Unparseable divisor parses to 0 first
        assert_eq!(solar_controller_amperage("250", "volts"), 0);
    }

    #[test]
    fn test_solar_array_wattage() {
        assert_eq!(solar_array_wattage("1000", "4"), 250);
        assert_eq!(solar_array_wattage("1000", "3"), 350);
        assert_eq!(solar_array_wattage("1", "5"), 50);
    }

    #[test]
    fn test_array_and_controller_rounding_laws() {
        for wh in (0..=5000).step_by(37) {
            for divisor in [1, 3, 4, 7, 12, 24, 48] {
                let array = solar_array_wattage(&wh.to_string(), &divisor.to_string());
                assert!(array >= 0);
                assert_eq!(array % 50, 0);
                assert!(array as f64 >= wh as f64 / divisor as f64);

                let controller = solar_controller_amperage(&wh.to_string(), &divisor.to_string());
                assert!(controller >= 0);
                assert_eq!(controller % 20, 0);
                assert!(controller as f64 >= wh as f64 / divisor as f64);
            }
        }
    }

    #[test]
    fn test_solar_controller_amperage() {
        assert_eq!(solar_controller_amperage("250", "12"), 40);
        assert_eq!(solar_controller_amperage("240", "12"), 20);
        assert_eq!(solar_controller_amperage("1200", "24"), 60);
    }

    #[test]
    fn test_battery_capacity() {
        assert_eq!(battery_capacity("lithium", "100", "5", "2"), 1000);
        assert_eq!(battery_capacity("leadacid", "100", "5", "2"), 2000);
        assert_eq!(battery_capacity("unknown", "100", "5", "2"), 0);
        assert_eq!(battery_capacity("lithium", "x", "5", "2"), 0);
    }

    #[test]
    fn test_entry_points_are_pure() {
        let system = SolarPowerSystem::default();
        for _ in 0..2 {
            assert_eq!(system.fuse_size_amperage("33"), 45);
            assert_eq!(system.capacity_in_amp_hours("999", "24"), 42);
            assert_eq!(system.solar_array_wattage("999", "5"), 200);
            assert_eq!(system.solar_controller_amperage("999", "24"), 60);
            assert_eq!(system.battery_capacity("leadacid", "75", "4", "3"), 1800);
        }
    }

    #[test]
    fn test_custom_config() {
        let system = SolarPowerSystem::new(SizingConfig {
            fuse_safety_factor: 1.5,
            fuse_increment_amps: 10,
            array_increment_watts: 100,
            controller_increment_amps: 10,
        });
        assert_eq!(system.fuse_size_amperage("20"), 30);
        assert_eq!(system.solar_array_wattage("1000", "3"), 400);
        assert_eq!(system.solar_controller_amperage("250", "12"), 30);
        assert_eq!(system.config().fuse_increment_amps, 10);
    }

    #[test]
    fn test_plan() {
        let plan = SolarPowerSystem::default().plan(&request("leadacid", "200", "24", "5", "20"));
        // 200 W × 5 h × 2 days × 2
        assert_eq!(plan.battery_wh, 4000);
        assert_eq!(plan.battery_ah, 167);
        // 1000 Wh/day over 5 sun hours
        assert_eq!(plan.array_watts, 200);
        // 200 W / 24 V = 8.3 A
        assert_eq!(plan.controller_amps, 20);
        assert_eq!(plan.fuse_amps, 25);
        // 20 ft at 20 A
        assert_eq!(plan.wire_gauge, "8 (10 mm²)");
    }

    #[test]
    fn test_plan_with_missing_inputs() {
        let plan = SolarPowerSystem::default().plan(&request("lithium", "100", "", "", "10"));
        assert_eq!(plan.battery_wh, 1000);
        assert_eq!(plan.battery_ah, 0);
        assert_eq!(plan.array_watts, 0);
        assert_eq!(plan.controller_amps, 0);
        assert_eq!(plan.fuse_amps, 0);
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);
    }

    #[test]
    fn test_plan_without_controller_current_has_no_cable() {
        let system = SolarPowerSystem::default();

        // Neither voltage nor sun hours
        let plan = system.plan(&request("lithium", "3000", "", "", "130"));
        assert_eq!(plan.battery_wh, 30000);
        assert_eq!(plan.controller_amps, 0);
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);

        // Sun hours but zero voltage
        let (plan, events) =
            count_diagnostics(|| system.plan(&request("lithium", "100", "0", "4", "10")));
        assert_eq!(plan.array_watts, 150);
        assert_eq!(plan.controller_amps, 0);
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);
        // battery Ah and controller current both divide by 0 V
        assert_eq!(events, 2);

        // Voltage but no sun hours
        let plan = system.plan(&request("lithium", "100", "12", "0", "10"));
        assert_eq!(plan.battery_ah, 84);
        assert_eq!(plan.array_watts, 0);
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);
    }

    #[test]
    fn test_plan_with_zero_load_still_sizes_cable() {
        // A computed 0 A is a real current; it takes the smallest option
        let plan = SolarPowerSystem::default().plan(&request("lithium", "0", "12", "5", "6"));
        assert_eq!(plan.controller_amps, 0);
        assert_eq!(plan.wire_gauge, "16 (1.5 mm²)");
    }

    #[test]
    fn test_plan_beyond_table() {
        // 10 kW array on 12 V needs more than 200 A
        let plan = SolarPowerSystem::default().plan(&request("lithium", "10000", "12", "5", "6"));
        assert!(plan.controller_amps > 200);
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);

        // Cable length not in the select
        let plan = SolarPowerSystem::default().plan(&request("lithium", "100", "12", "5", "7"));
        assert_eq!(plan.wire_gauge, NOT_AVAILABLE);
    }
}
