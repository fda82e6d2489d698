//! Route analysis engine
//!
//! Resolver -> capacity validator -> estimator -> timeline -> feasibility/advisory.
//! The engine holds only immutable tables and can be shared across threads.

use tracing::debug;
use traxion_types::{Result, RouteAnalysisResult, RouteRequest};

use crate::model::{DistanceTable, OperationalConfig};
use crate::service::{
    check_capacity, check_time_window, decide_feasibility, estimate_trip, generate_analysis_report,
    generate_assumptions, generate_recommendations, generate_timeline, resolve_distance,
};

#[derive(Debug, Clone, Default)]
pub struct RouteAnalysisEngine {
    config: OperationalConfig,
    distances: DistanceTable,
}

impl RouteAnalysisEngine {
    pub fn new(config: OperationalConfig, distances: DistanceTable) -> Self {
        Self { config, distances }
    }

    pub fn config(&self) -> &OperationalConfig {
        &self.config
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Analyze one request.
    ///
    /// Errors only with `Error::UnsupportedVehicleType` when the vehicle type
    /// has no entry in the operational tables. Overload and schedule problems
    /// are reported through the result's warnings and verdict.
    pub fn analyze(&self, request: &RouteRequest) -> Result<RouteAnalysisResult> {
        let resolved = resolve_distance(&self.distances, &request.origin, &request.destination);
        let capacity = check_capacity(&self.config, request.vehicle_type, request.cargo_weight)?;
        let estimate = estimate_trip(
            &self.config,
            resolved.distance_km,
            request.vehicle_type,
            request.cargo_weight,
        )?;

        let timeline = generate_timeline(
            &self.config,
            request,
            resolved.distance_km,
            estimate.driving_time_hours,
            estimate.required_breaks,
        );

        let window = check_time_window(request, estimate.total_time_hours);
        let feasibility = decide_feasibility(&capacity, &window);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            distance_km = resolved.distance_km,
            distance_source = ?resolved.source,
            total_hours = estimate.total_time_hours,
            verdict = %feasibility,
            "route analyzed"
        );

        Ok(RouteAnalysisResult {
            narrative: generate_analysis_report(request, &capacity, &estimate, &window),
            route_summary: estimate.to_summary(),
            timeline,
            assumptions: generate_assumptions(&self.config),
            warnings: capacity.warning().into_iter().collect(),
            recommendations: generate_recommendations(
                request,
                resolved.distance_km,
                estimate.total_time_hours,
            ),
            feasibility,
        })
    }
}
