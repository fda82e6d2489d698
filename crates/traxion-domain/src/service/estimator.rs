//! Driving, rest and loading time, fuel and cost
//!
//! Values here stay at full precision. Rounding happens only in
//! [`TripEstimate::to_summary`] and in the narrative report.

use traxion_types::{Result, RouteSummary, VehicleType};

use crate::model::OperationalConfig;

/// Intermediate trip quantities shared by the summary, timeline and report
#[derive(Debug, Clone, PartialEq)]
pub struct TripEstimate {
    pub distance_km: f64,
    pub driving_time_hours: f64,
    pub required_breaks: u32,
    pub rest_time_hours: f64,
    pub loading_time_hours: f64,
    pub total_time_hours: f64,
    pub fuel_consumption_liters: f64,
    pub fuel_cost: f64,
    /// Fuel plus hourly operating cost
    pub total_cost: f64,
}

pub fn estimate_trip(
    config: &OperationalConfig,
    distance_km: f64,
    vehicle_type: VehicleType,
    cargo_weight_tons: f64,
) -> Result<TripEstimate> {
    let rules = config.rules();
    let km_per_liter = config.fuel_rate(vehicle_type)?;

    let driving_time_hours = distance_km / rules.average_speed_highway_kmh;
    let required_breaks = (driving_time_hours / rules.mandatory_break_after_hours).floor() as u32;
    let rest_time_hours = f64::from(required_breaks) * rules.break_duration_hours();
    let loading_time_hours = (cargo_weight_tons / rules.loading_tons_per_hour).ceil();
    let total_time_hours = driving_time_hours + rest_time_hours + loading_time_hours;

    let fuel_consumption_liters = distance_km / km_per_liter;
    let fuel_cost = fuel_consumption_liters * rules.diesel_price_per_liter;
    let total_cost = fuel_cost + total_time_hours * rules.hourly_operating_cost;

    Ok(TripEstimate {
        distance_km,
        driving_time_hours,
        required_breaks,
        rest_time_hours,
        loading_time_hours,
        total_time_hours,
        fuel_consumption_liters,
        fuel_cost,
        total_cost,
    })
}

impl TripEstimate {
    pub fn to_summary(&self) -> RouteSummary {
        RouteSummary {
            total_distance_km: self.distance_km.round(),
            total_time_hours: round_to_tenth(self.total_time_hours),
            driving_time_hours: round_to_tenth(self.driving_time_hours),
            rest_time_hours: round_to_tenth(self.rest_time_hours),
            loading_time_hours: round_to_tenth(self.loading_time_hours),
            fuel_consumption_liters: self.fuel_consumption_liters.round(),
            total_cost: self.total_cost.round(),
        }
    }
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(distance_km: f64, vehicle_type: VehicleType, cargo: f64) -> TripEstimate {
        estimate_trip(&OperationalConfig::default(), distance_km, vehicle_type, cargo).unwrap()
    }

    #[test]
    fn test_cdmx_monterrey() {
        let e = estimate(900.0, VehicleType::Truck40ft, 5.0);
        assert!((e.driving_time_hours - 15.0).abs() < 1e-9);
        assert_eq!(e.required_breaks, 3);
        assert!((e.rest_time_hours - 1.5).abs() < 1e-9);
        assert!((e.loading_time_hours - 1.0).abs() < 1e-9);
        assert!((e.total_time_hours - 17.5).abs() < 1e-9);
        // 900 / 2.8 = 321.43 L, x 22.5 = 7232.14, + 17.5 x 500
        assert!((e.fuel_consumption_liters - 321.43).abs() < 0.01);
        assert!((e.total_cost - 15982.14).abs() < 0.01);
    }

    #[test]
    fn test_short_route_has_no_breaks() {
        // 130 km = 2.17 h of driving
        let e = estimate(130.0, VehicleType::Van35Tons, 2.0);
        assert_eq!(e.required_breaks, 0);
        assert_eq!(e.rest_time_hours, 0.0);
    }

    #[test]
    fn test_exact_interval_triggers_break() {
        // 240 km = exactly 4 h
        let e = estimate(240.0, VehicleType::Truck40ft, 1.0);
        assert_eq!(e.required_breaks, 1);
    }

    #[test]
    fn test_loading_rounds_up_partial_increment() {
        assert_eq!(estimate(300.0, VehicleType::Trailer53ft, 5.0).loading_time_hours, 1.0);
        assert_eq!(estimate(300.0, VehicleType::Trailer53ft, 5.1).loading_time_hours, 2.0);
        assert_eq!(estimate(300.0, VehicleType::Trailer53ft, 0.5).loading_time_hours, 1.0);
    }

    #[test]
    fn test_summary_rounding() {
        let summary = estimate(540.0, VehicleType::Trailer53ft, 12.0).to_summary();
        // 9 h driving, 2 breaks, 3 h loading
        assert_eq!(summary.total_distance_km, 540.0);
        assert_eq!(summary.driving_time_hours, 9.0);
        assert_eq!(summary.rest_time_hours, 1.0);
        assert_eq!(summary.loading_time_hours, 3.0);
        assert_eq!(summary.total_time_hours, 13.0);
        // 540 / 2.3 = 234.78 L
        assert_eq!(summary.fuel_consumption_liters, 235.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(2.1666), 2.2);
        assert_eq!(round_to_tenth(15.0), 15.0);
        assert_eq!(round_to_tenth(0.04), 0.0);
    }

    #[test]
    fn test_summary_total_is_sum_of_parts() {
        let summary = estimate(800.0, VehicleType::Truck40ft, 7.0).to_summary();
        let parts =
            summary.driving_time_hours + summary.rest_time_hours + summary.loading_time_hours;
        assert!((summary.total_time_hours - parts).abs() <= 0.1 + 1e-9);
    }
}
