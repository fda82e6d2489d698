//! Operational tables loader from TOML
//!
//! ```toml
//! fallback_distance_km = 300.0
//!
//! [rules]
//! average_speed_highway_kmh = 60.0
//!
//! [[vehicles]]
//! vehicle_type = "truck-40ft"
//! km_per_liter = 2.8
//! max_cargo_tons = 15.0
//!
//! [[routes]]
//! origin = "CDMX"
//! destination = "Monterrey"
//! distance_km = 900.0
//! ```
//!
//! Omitted sections keep the built-in values. A `vehicles` list, when
//! present, must cover every vehicle type.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use traxion_domain::model::{
    DistanceTable, OperationalConfig, OperationalRules, RouteDistance, VehicleSpec,
    DEFAULT_FALLBACK_DISTANCE_KM,
};
use traxion_domain::RouteAnalysisEngine;
use traxion_types::{ConfigError, Error, Result};

/// Container for parsing the operational TOML file
#[derive(Debug, Default, Deserialize)]
struct OperationalFile {
    #[serde(default)]
    rules: OperationalRules,
    vehicles: Option<Vec<VehicleSpec>>,
    routes: Option<Vec<RouteDistance>>,
    fallback_distance_km: Option<f64>,
}

/// Validated operational configuration plus distance table
#[derive(Debug, Clone)]
pub struct OperationalTables {
    pub config: OperationalConfig,
    pub distances: DistanceTable,
}

impl OperationalTables {
    /// Load tables from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Operational tables file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read operational tables file: {}",
                e
            )))
        })?;

        let tables = Self::load_from_str(&content)?;
        info!(
            path = %path.display(),
            routes = tables.distances.routes().len(),
            "loaded operational tables"
        );
        Ok(tables)
    }

    /// Load tables from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: OperationalFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse operational tables TOML: {}",
                e
            )))
        })?;

        let builtin = OperationalConfig::default();
        let vehicles = file
            .vehicles
            .unwrap_or_else(|| builtin.vehicles().cloned().collect());
        let config = OperationalConfig::new(file.rules, vehicles)?;

        let builtin_distances = DistanceTable::default();
        let routes = file
            .routes
            .unwrap_or_else(|| builtin_distances.routes().to_vec());
        let distances = DistanceTable::new(
            routes,
            file.fallback_distance_km.unwrap_or(DEFAULT_FALLBACK_DISTANCE_KM),
        )?;

        Ok(Self { config, distances })
    }

    pub fn into_engine(self) -> RouteAnalysisEngine {
        RouteAnalysisEngine::new(self.config, self.distances)
    }
}

impl Default for OperationalTables {
    fn default() -> Self {
        Self {
            config: OperationalConfig::default(),
            distances: DistanceTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use traxion_types::VehicleType;

    #[test]
    fn test_empty_file_keeps_builtin_tables() {
        let tables = OperationalTables::load_from_str("").unwrap();
        assert_eq!(tables.config, OperationalConfig::default());
        assert_eq!(tables.distances.get("CDMX", "Monterrey"), Some(900.0));
        assert_eq!(tables.distances.fallback_km(), 300.0);
    }

    #[test]
    fn test_partial_rules_override() {
        let tables = OperationalTables::load_from_str(
            r#"
            fallback_distance_km = 250.0

            [rules]
            diesel_price_per_liter = 24.0
            "#,
        )
        .unwrap();
        assert_eq!(tables.config.rules().diesel_price_per_liter, 24.0);
        assert_eq!(tables.config.rules().average_speed_highway_kmh, 60.0);
        assert_eq!(tables.distances.fallback_km(), 250.0);
    }

    #[test]
    fn test_routes_replace_builtin() {
        let tables = OperationalTables::load_from_str(
            r#"
            [[routes]]
            origin = "Querétaro"
            destination = "León"
            distance_km = 180.0
            "#,
        )
        .unwrap();
        assert_eq!(tables.distances.get("Querétaro", "León"), Some(180.0));
        assert_eq!(tables.distances.get("CDMX", "Monterrey"), None);
    }

    #[test]
    fn test_incomplete_vehicle_table_is_rejected() {
        let err = OperationalTables::load_from_str(
            r#"
            [[vehicles]]
            vehicle_type = "truck-40ft"
            km_per_liter = 3.0
            max_cargo_tons = 16.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingVehicle(_))));
    }

    #[test]
    fn test_unknown_vehicle_name_is_parse_error() {
        let err = OperationalTables::load_from_str(
            r#"
            [[vehicles]]
            vehicle_type = "semi-60ft"
            km_per_liter = 3.0
            max_cargo_tons = 16.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_infinite_values_are_rejected() {
        let documents = [
            "[[routes]]\norigin = \"A\"\ndestination = \"B\"\ndistance_km = inf\n",
            "fallback_distance_km = inf\n",
            "[rules]\naverage_speed_highway_kmh = inf\n",
            "[rules]\nloading_tons_per_hour = nan\n",
        ];
        for document in documents {
            let err = OperationalTables::load_from_str(document).unwrap_err();
            assert!(
                matches!(err, Error::Config(ConfigError::InvalidValue(_))),
                "{document}: {err}"
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut content = String::new();
        for (name, rate, max) in [
            ("trailer-53ft", 2.5, 22.0),
            ("truck-40ft", 2.8, 15.0),
            ("van-35tons", 3.5, 3.5),
            ("pickup-35tons", 6.0, 1.5),
        ] {
            content.push_str(&format!(
                "[[vehicles]]\nvehicle_type = \"{}\"\n\
                 km_per_liter = {:?}\nmax_cargo_tons = {:?}\n\n",
                name, rate, max
            ));
        }
        file.write_all(content.as_bytes()).unwrap();

        let tables = OperationalTables::load_from_file(file.path()).unwrap();
        assert_eq!(tables.config.max_cargo_weight(VehicleType::Trailer53ft).unwrap(), 22.0);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/operational.toml");
        let err = OperationalTables::load_from_file(path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
