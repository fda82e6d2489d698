//! Cargo weight against the vehicle's rated capacity

use tracing::warn;
use traxion_types::{Result, VehicleType};

use crate::model::OperationalConfig;

/// Result of the capacity check for one request
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityCheck {
    pub vehicle_type: VehicleType,
    pub cargo_weight_tons: f64,
    pub max_cargo_tons: f64,
    pub is_overloaded: bool,
    pub excess_tons: Option<f64>,
    pub load_ratio_percent: f64,
}

impl CapacityCheck {
    /// Warning message for an overloaded unit
    pub fn warning(&self) -> Option<String> {
        if !self.is_overloaded {
            return None;
        }
        Some(format!(
            "ADVERTENCIA: La carga ({}t) excede la capacidad máxima de la unidad ({}t)",
            self.cargo_weight_tons, self.max_cargo_tons
        ))
    }
}

/// Fails only when the vehicle type is missing from the operational tables
pub fn check_capacity(
    config: &OperationalConfig,
    vehicle_type: VehicleType,
    cargo_weight_tons: f64,
) -> Result<CapacityCheck> {
    let max_cargo_tons = config.max_cargo_weight(vehicle_type)?;
    let excess = cargo_weight_tons - max_cargo_tons;
    let is_overloaded = excess > 0.0;

    if is_overloaded {
        warn!(
            vehicle = %vehicle_type,
            cargo_weight_tons,
            max_cargo_tons,
            "cargo exceeds rated capacity"
        );
    }

    Ok(CapacityCheck {
        vehicle_type,
        cargo_weight_tons,
        max_cargo_tons,
        is_overloaded,
        excess_tons: if is_overloaded { Some(excess) } else { None },
        load_ratio_percent: (cargo_weight_tons / max_cargo_tons) * 100.0,
    })
}
