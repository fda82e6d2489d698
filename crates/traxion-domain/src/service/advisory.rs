//! Time-window feasibility, recommendations and disclosed assumptions

use chrono::NaiveTime;
use traxion_types::clock::minutes_since_midnight;
use traxion_types::{Feasibility, RouteRequest};

use crate::model::OperationalConfig;
use crate::service::capacity_validator::CapacityCheck;
use crate::service::timeline::add_hours;

const RELIEF_DRIVER_AFTER_HOURS: f64 = 8.0;
const INSPECTION_AFTER_KM: f64 = 500.0;
const SPECIAL_PERMIT_AFTER_TONS: f64 = 10.0;

/// Projected arrival (including loading) against the requested deadline
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindowCheck {
    /// Raw minute count, may exceed 1440
    pub arrival_minutes: f64,
    /// Wrapped time of day for display
    pub arrival_clock_time: NaiveTime,
    pub fits: bool,
}

/// No day wraparound: an arrival past midnight is always later than a same-day deadline
pub fn check_time_window(request: &RouteRequest, total_time_hours: f64) -> TimeWindowCheck {
    let start_minutes = minutes_since_midnight(&request.start_time);
    let end_minutes = minutes_since_midnight(&request.end_time);
    let arrival_minutes = start_minutes as f64 + total_time_hours * 60.0;

    TimeWindowCheck {
        arrival_minutes,
        arrival_clock_time: add_hours(request.start_time, total_time_hours),
        fits: arrival_minutes <= end_minutes as f64,
    }
}

/// Capacity violation overrides any time-window outcome
pub fn decide_feasibility(capacity: &CapacityCheck, window: &TimeWindowCheck) -> Feasibility {
    if capacity.is_overloaded {
        Feasibility::NotViable
    } else if window.fits {
        Feasibility::Viable
    } else {
        Feasibility::NeedsAdjustment
    }
}

pub fn generate_recommendations(
    request: &RouteRequest,
    distance_km: f64,
    total_time_hours: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if total_time_hours > RELIEF_DRIVER_AFTER_HOURS {
        recommendations.push("Considerar conductor de relevo para viajes largos".to_string());
    }
    if distance_km > INSPECTION_AFTER_KM {
        recommendations.push("Programar inspección técnica antes del viaje".to_string());
    }
    if request.cargo_weight > SPECIAL_PERMIT_AFTER_TONS {
        recommendations.push("Verificar permisos especiales de carga pesada".to_string());
    }

    recommendations.push("Llevar registro electrónico de horas de servicio".to_string());
    recommendations
        .push("Planificar paradas en gasolineras con servicio para trailers".to_string());

    recommendations
}

/// Human-readable disclosure of the constants in use
pub fn generate_assumptions(config: &OperationalConfig) -> Vec<String> {
    let rules = config.rules();
    vec![
        format!("Velocidad promedio en carretera: {} km/h", rules.average_speed_highway_kmh),
        format!("Velocidad en zona urbana: {} km/h", rules.average_speed_city_kmh),
        format!("Tiempo de carga: 1 hora por cada {} toneladas", rules.loading_tons_per_hour),
        format!(
            "Descanso obligatorio: {} minutos cada {} horas de conducción",
            rules.break_duration_minutes, rules.mandatory_break_after_hours
        ),
        format!("Precio del diesel: ${:.2} por litro", rules.diesel_price_per_liter),
        format!("Costo operativo del conductor: ${} por hora", rules.hourly_operating_cost),
    ]
}
