//! Route request, analysis result and batch envelope types

use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::clock::hhmm;
use crate::error::Error;

/// Supported vehicle types
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub enum VehicleType {
    #[serde(rename = "trailer-53ft")]
    #[value(name = "trailer-53ft")]
    Trailer53ft,
    #[serde(rename = "truck-40ft")]
    #[value(name = "truck-40ft")]
    Truck40ft,
    #[serde(rename = "van-35tons")]
    #[value(name = "van-35tons")]
    Van35Tons,
    #[serde(rename = "pickup-35tons")]
    #[value(name = "pickup-35tons")]
    Pickup35Tons,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Trailer53ft,
        VehicleType::Truck40ft,
        VehicleType::Van35Tons,
        VehicleType::Pickup35Tons,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Trailer53ft => "trailer-53ft",
            VehicleType::Truck40ft => "truck-40ft",
            VehicleType::Van35Tons => "van-35tons",
            VehicleType::Pickup35Tons => "pickup-35tons",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Trailer53ft => "Tráiler 53 Pies",
            VehicleType::Truck40ft => "Camión 40 Pies",
            VehicleType::Van35Tons => "Camioneta 3.5 Tons",
            VehicleType::Pickup35Tons => "Pickup 3.5 Tons",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| Error::UnsupportedVehicleType(s.to_string()))
    }
}

/// Planning priority. Advisory only; it does not alter the computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Cost,
    Time,
    Distance,
    Safety,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Cost => "Menor Costo",
            Priority::Time => "Menor Tiempo",
            Priority::Distance => "Menor Kilometraje",
            Priority::Safety => "Mayor Seguridad",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "cost" => Ok(Priority::Cost),
            "time" => Ok(Priority::Time),
            "distance" => Ok(Priority::Distance),
            "safety" => Ok(Priority::Safety),
            other => Err(Error::InvalidRequest(format!("unknown priority '{}'", other))),
        }
    }
}

/// Kind of a timeline segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Start,
    Driving,
    Rest,
    Arrival,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Start => "Punto de inicio",
            ActivityKind::Driving => "En movimiento",
            ActivityKind::Rest => "En descanso",
            ActivityKind::Arrival => "Destino final",
        }
    }
}

/// Feasibility verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feasibility {
    Viable,
    NeedsAdjustment,
    NotViable,
}

impl Feasibility {
    pub fn label(&self) -> &'static str {
        match self {
            Feasibility::Viable => "RUTA VIABLE",
            Feasibility::NeedsAdjustment => "REQUIERE AJUSTES",
            Feasibility::NotViable => "RUTA NO VIABLE",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            Feasibility::Viable => "viable",
            Feasibility::NeedsAdjustment => "needs-adjustment",
            Feasibility::NotViable => "not-viable",
        }
    }
}

impl std::fmt::Display for Feasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_en())
    }
}

/// Trip inputs collected by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub vehicle_type: VehicleType,
    /// Tons
    pub cargo_weight: f64,
    /// Cubic meters (not constrained)
    pub cargo_volume: f64,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub priority: Priority,
}

/// Cost/time summary, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub total_distance_km: f64,
    pub total_time_hours: f64,
    pub driving_time_hours: f64,
    pub rest_time_hours: f64,
    pub loading_time_hours: f64,
    pub fuel_consumption_liters: f64,
    pub total_cost: f64,
}

impl RouteSummary {
    /// Operational efficiency score (0-100, may go negative for extreme trips)
    pub fn efficiency_score(&self) -> i64 {
        let distance_score = (self.total_distance_km / 10.0).min(100.0);
        let time_score = ((24.0 - self.total_time_hours) * 10.0).min(100.0);
        let cost_score = ((50_000.0 - self.total_cost) / 500.0).min(100.0);
        ((distance_score + time_score + cost_score) / 3.0).round() as i64
    }
}

/// Efficiency grade derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyGrade {
    High,
    Medium,
    Low,
}

impl EfficiencyGrade {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 80 => EfficiencyGrade::High,
            s if s >= 60 => EfficiencyGrade::Medium,
            _ => EfficiencyGrade::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyGrade::High => "alta",
            EfficiencyGrade::Medium => "media",
            EfficiencyGrade::Low => "baja",
        }
    }
}

/// One ordered segment of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub step_number: u32,
    pub description: String,
    pub cumulative_distance_km: f64,
    #[serde(with = "hhmm")]
    pub estimated_clock_time: NaiveTime,
    pub activity_kind: ActivityKind,
    pub details: String,
}

/// Engine output for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalysisResult {
    pub narrative: String,
    pub route_summary: RouteSummary,
    pub timeline: Vec<TimelineStep>,
    pub assumptions: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub feasibility: Feasibility,
}

/// Downloadable record of one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport {
    pub route_data: RouteRequest,
    pub analysis: RouteAnalysisResult,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// One row of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based data row in the source file
    pub row: usize,
    pub request: RouteRequest,
    pub result: Option<RouteAnalysisResult>,
    pub error: Option<String>,
}

/// Batch analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResults {
    pub entries: Vec<BatchEntry>,
    pub total_processed: usize,
    pub viable: usize,
    pub needs_adjustment: usize,
    pub not_viable: usize,
    pub failed: usize,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}
