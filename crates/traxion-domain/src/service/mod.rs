//! Domain services, invoked in order by the engine

pub mod advisory;
pub mod capacity_validator;
pub mod distance_resolver;
pub mod estimator;
pub mod report;
pub mod timeline;

pub use advisory::{
    check_time_window, decide_feasibility, generate_assumptions, generate_recommendations,
    TimeWindowCheck,
};
pub use capacity_validator::{check_capacity, CapacityCheck};
pub use distance_resolver::{resolve_distance, DistanceSource, ResolvedDistance};
pub use estimator::{estimate_trip, round_to_tenth, TripEstimate};
pub use report::generate_analysis_report;
pub use timeline::{add_hours, generate_timeline};
