//! Static directed city-pair distance table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use traxion_types::Result;

use super::operational_config::{invalid, is_positive};

/// Distance used when a city pair is not in the table
pub const DEFAULT_FALLBACK_DISTANCE_KM: f64 = 300.0;

/// One directed entry: `origin-destination`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

/// Directed lookup table. `A-B` and `B-A` are distinct keys.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    routes: Vec<RouteDistance>,
    index: HashMap<String, f64>,
    fallback_km: f64,
}

impl DistanceTable {
    pub fn new(routes: Vec<RouteDistance>, fallback_km: f64) -> Result<Self> {
        if !is_positive(fallback_km) {
            return Err(invalid(format!(
                "fallback distance must be finite and > 0 (got {})",
                fallback_km
            )));
        }

        let mut index = HashMap::with_capacity(routes.len());
        for route in &routes {
            if !is_positive(route.distance_km) {
                return Err(invalid(format!(
                    "distance for {} must be finite and > 0 (got {})",
                    route_key(&route.origin, &route.destination),
                    route.distance_km
                )));
            }
            index.insert(route_key(&route.origin, &route.destination), route.distance_km);
        }

        Ok(Self {
            routes,
            index,
            fallback_km,
        })
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, origin: &str, destination: &str) -> Option<f64> {
        self.index.get(&route_key(origin, destination)).copied()
    }

    pub fn fallback_km(&self) -> f64 {
        self.fallback_km
    }

    pub fn routes(&self) -> &[RouteDistance] {
        &self.routes
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        let routes: Vec<RouteDistance> = [
            ("CDMX", "Monterrey", 900.0),
            ("CDMX", "Guadalajara", 540.0),
            ("Guadalajara", "Monterrey", 800.0),
            ("CDMX", "Puebla", 130.0),
            ("Monterrey", "Nuevo Laredo", 220.0),
        ]
        .into_iter()
        .map(|(origin, destination, distance_km)| RouteDistance {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km,
        })
        .collect();

        let index = routes
            .iter()
            .map(|r| (route_key(&r.origin, &r.destination), r.distance_km))
            .collect();

        Self {
            routes,
            index,
            fallback_km: DEFAULT_FALLBACK_DISTANCE_KM,
        }
    }
}

/// Composite lookup key `"<origin>-<destination>"`
pub fn route_key(origin: &str, destination: &str) -> String {
    format!("{}-{}", origin, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup() {
        let table = DistanceTable::default();
        assert_eq!(table.get("CDMX", "Monterrey"), Some(900.0));
        assert_eq!(table.get("Monterrey", "Nuevo Laredo"), Some(220.0));
        assert_eq!(table.routes().len(), 5);
    }

    #[test]
    fn test_not_mirrored() {
        let table = DistanceTable::default();
        assert_eq!(table.get("Monterrey", "CDMX"), None);
    }

    #[test]
    fn test_case_sensitive() {
        let table = DistanceTable::default();
        assert_eq!(table.get("cdmx", "monterrey"), None);
        assert_eq!(table.get("CDMX ", "Monterrey"), None);
    }

    #[test]
    fn test_new_rejects_non_positive_distance() {
        let routes = vec![RouteDistance {
            origin: "A".to_string(),
            destination: "B".to_string(),
            distance_km: 0.0,
        }];
        assert!(DistanceTable::new(routes, 300.0).is_err());
        assert!(DistanceTable::new(Vec::new(), 0.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_distance() {
        let routes = vec![RouteDistance {
            origin: "A".to_string(),
            destination: "B".to_string(),
            distance_km: f64::INFINITY,
        }];
        assert!(DistanceTable::new(routes, 300.0).is_err());
        assert!(DistanceTable::new(Vec::new(), f64::INFINITY).is_err());
        assert!(DistanceTable::new(Vec::new(), f64::NAN).is_err());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let routes = vec![
            RouteDistance {
                origin: "A".to_string(),
                destination: "B".to_string(),
                distance_km: 100.0,
            },
            RouteDistance {
                origin: "A".to_string(),
                destination: "B".to_string(),
                distance_km: 120.0,
            },
        ];
        let table = DistanceTable::new(routes, 300.0).unwrap();
        assert_eq!(table.get("A", "B"), Some(120.0));
    }
}
