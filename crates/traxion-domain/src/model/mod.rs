//! Domain model types

pub mod distance_table;
pub mod operational_config;

pub use distance_table::{route_key, DistanceTable, RouteDistance, DEFAULT_FALLBACK_DISTANCE_KM};
pub use operational_config::{OperationalConfig, OperationalRules, VehicleSpec};
