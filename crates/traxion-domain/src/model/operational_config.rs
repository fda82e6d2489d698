//! Operational constants and per-vehicle tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use traxion_types::{ConfigError, Error, Result, VehicleType};

/// Driving rules and unit prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalRules {
    /// Daily driving limit (informational)
    #[serde(default = "default_max_driving_hours")]
    pub max_driving_hours: f64,
    /// Continuous driving before a mandatory break
    #[serde(default = "default_break_after_hours")]
    pub mandatory_break_after_hours: f64,
    #[serde(default = "default_break_duration_minutes")]
    pub break_duration_minutes: f64,
    #[serde(default = "default_highway_speed")]
    pub average_speed_highway_kmh: f64,
    #[serde(default = "default_city_speed")]
    pub average_speed_city_kmh: f64,
    /// Loading heuristic: one hour per started block of this many tons
    #[serde(default = "default_loading_tons_per_hour")]
    pub loading_tons_per_hour: f64,
    /// MXN per liter
    #[serde(default = "default_diesel_price")]
    pub diesel_price_per_liter: f64,
    /// MXN per hour of trip
    #[serde(default = "default_hourly_operating_cost")]
    pub hourly_operating_cost: f64,
}

fn default_max_driving_hours() -> f64 {
    10.0
}

fn default_break_after_hours() -> f64 {
    4.0
}

fn default_break_duration_minutes() -> f64 {
    30.0
}

fn default_highway_speed() -> f64 {
    60.0
}

fn default_city_speed() -> f64 {
    30.0
}

fn default_loading_tons_per_hour() -> f64 {
    5.0
}

fn default_diesel_price() -> f64 {
    22.5
}

fn default_hourly_operating_cost() -> f64 {
    500.0
}

impl Default for OperationalRules {
    fn default() -> Self {
        Self {
            max_driving_hours: default_max_driving_hours(),
            mandatory_break_after_hours: default_break_after_hours(),
            break_duration_minutes: default_break_duration_minutes(),
            average_speed_highway_kmh: default_highway_speed(),
            average_speed_city_kmh: default_city_speed(),
            loading_tons_per_hour: default_loading_tons_per_hour(),
            diesel_price_per_liter: default_diesel_price(),
            hourly_operating_cost: default_hourly_operating_cost(),
        }
    }
}

/// Finite and strictly positive. Rejects NaN and infinities.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn invalid(message: String) -> Error {
    ConfigError::InvalidValue(message).into()
}

impl OperationalRules {
    pub fn break_duration_hours(&self) -> f64 {
        self.break_duration_minutes / 60.0
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("max_driving_hours", self.max_driving_hours),
            ("mandatory_break_after_hours", self.mandatory_break_after_hours),
            ("average_speed_highway_kmh", self.average_speed_highway_kmh),
            ("average_speed_city_kmh", self.average_speed_city_kmh),
            ("loading_tons_per_hour", self.loading_tons_per_hour),
        ];
        for (name, value) in positive {
            if !is_positive(value) {
                return Err(invalid(format!("{} must be finite and > 0 (got {})", name, value)));
            }
        }
        let non_negative = [
            ("break_duration_minutes", self.break_duration_minutes),
            ("diesel_price_per_liter", self.diesel_price_per_liter),
            ("hourly_operating_cost", self.hourly_operating_cost),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{} must be finite and >= 0 (got {})", name, value)));
            }
        }
        Ok(())
    }
}

/// Fuel and capacity rating for one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub vehicle_type: VehicleType,
    /// Kilometers per liter of diesel
    pub km_per_liter: f64,
    /// Rated maximum cargo (tons)
    pub max_cargo_tons: f64,
}

/// Immutable operational configuration shared by every analysis
#[derive(Debug, Clone, PartialEq)]
pub struct OperationalConfig {
    rules: OperationalRules,
    vehicles: BTreeMap<VehicleType, VehicleSpec>,
}

impl OperationalConfig {
    /// Build a configuration, rejecting tables that miss any vehicle type
    pub fn new(rules: OperationalRules, vehicles: Vec<VehicleSpec>) -> Result<Self> {
        rules.validate()?;

        let mut table = BTreeMap::new();
        for spec in vehicles {
            if !is_positive(spec.km_per_liter) || !is_positive(spec.max_cargo_tons) {
                return Err(invalid(format!(
                    "{}: km_per_liter and max_cargo_tons must be finite and > 0",
                    spec.vehicle_type
                )));
            }
            table.insert(spec.vehicle_type, spec);
        }

        if let Some(missing) = VehicleType::ALL.iter().find(|v| !table.contains_key(v)) {
            return Err(ConfigError::MissingVehicle(missing.to_string()).into());
        }

        Ok(Self { rules, vehicles: table })
    }

    pub fn rules(&self) -> &OperationalRules {
        &self.rules
    }

    pub fn vehicle(&self, vehicle_type: VehicleType) -> Result<&VehicleSpec> {
        self.vehicles
            .get(&vehicle_type)
            .ok_or_else(|| Error::UnsupportedVehicleType(vehicle_type.to_string()))
    }

    pub fn fuel_rate(&self, vehicle_type: VehicleType) -> Result<f64> {
        self.vehicle(vehicle_type).map(|v| v.km_per_liter)
    }

    pub fn max_cargo_weight(&self, vehicle_type: VehicleType) -> Result<f64> {
        self.vehicle(vehicle_type).map(|v| v.max_cargo_tons)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleSpec> {
        self.vehicles.values()
    }
}

impl Default for OperationalConfig {
    fn default() -> Self {
        let vehicles = [
            (VehicleType::Trailer53ft, 2.3, 20.0),
            (VehicleType::Truck40ft, 2.8, 15.0),
            (VehicleType::Van35Tons, 3.5, 3.5),
            (VehicleType::Pickup35Tons, 6.0, 1.5),
        ]
        .into_iter()
        .map(|(vehicle_type, km_per_liter, max_cargo_tons)| {
            (
                vehicle_type,
                VehicleSpec {
                    vehicle_type,
                    km_per_liter,
                    max_cargo_tons,
                },
            )
        })
        .collect();

        Self {
            rules: OperationalRules::default(),
            vehicles,
        }
    }
}
