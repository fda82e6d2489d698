//! Origin/destination to kilometers

use crate::model::DistanceTable;

/// Where a resolved distance came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSource {
    Table,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDistance {
    pub distance_km: f64,
    pub source: DistanceSource,
}

/// Resolve a directed city pair. Unknown pairs get the table's fallback distance.
pub fn resolve_distance(
    table: &DistanceTable,
    origin: &str,
    destination: &str,
) -> ResolvedDistance {
    match table.get(origin, destination) {
        Some(distance_km) => ResolvedDistance {
            distance_km,
            source: DistanceSource::Table,
        },
        None => ResolvedDistance {
            distance_km: table.fallback_km(),
            source: DistanceSource::Fallback,
        },
    }
}
