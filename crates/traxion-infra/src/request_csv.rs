//! CSV loader for batch route requests
//!
//! Expected header:
//! origin,destination,vehicle_type,cargo_weight,cargo_volume,start_time,end_time[,priority]
//!
//! Non-UTF-8 input is decoded as Windows-1252.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use serde::Deserialize;
use tracing::{info, warn};
use traxion_types::clock::parse_clock_time;
use traxion_types::{Error, Priority, Result, RouteRequest, VehicleType};

/// One parsed request with its 1-based data row
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRequest {
    pub row: usize,
    pub request: RouteRequest,
}

#[derive(Debug, Deserialize)]
struct RequestRow {
    origin: String,
    destination: String,
    vehicle_type: String,
    cargo_weight: f64,
    cargo_volume: f64,
    start_time: String,
    end_time: String,
    #[serde(default)]
    priority: Option<String>,
}

/// Load route requests from a CSV file
pub fn load_requests_from_csv(path: &Path) -> Result<Vec<CsvRequest>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!("CSV file not found: {}", path.display())));
    }
    let bytes = std::fs::read(path)?;
    let requests = parse_requests_csv(&bytes)?;
    info!(path = %path.display(), count = requests.len(), "loaded route requests");
    Ok(requests)
}

/// Parse route requests from raw CSV bytes.
///
/// A malformed row (bad number, bad time, unknown vehicle type) fails the
/// whole load and names the row.
pub fn parse_requests_csv(bytes: &[u8]) -> Result<Vec<CsvRequest>> {
    let content = decode_csv_bytes(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut requests = Vec::new();
    for (row_idx, record) in reader.deserialize::<RequestRow>().enumerate() {
        let row = row_idx + 1;
        let row_error = |e: &dyn std::fmt::Display| Error::CsvLoader(format!("row {}: {}", row, e));
        let record = record.map_err(|e| row_error(&e))?;
        let request = into_request(record).map_err(|e| row_error(&e))?;
        requests.push(CsvRequest { row, request });
    }

    if requests.is_empty() {
        return Err(Error::CsvLoader("CSV file has no data rows".to_string()));
    }

    Ok(requests)
}

fn into_request(row: RequestRow) -> Result<RouteRequest> {
    let vehicle_type: VehicleType = row.vehicle_type.parse()?;
    let priority: Priority = row.priority.as_deref().unwrap_or("").parse()?;

    Ok(RouteRequest {
        origin: row.origin,
        destination: row.destination,
        vehicle_type,
        cargo_weight: row.cargo_weight,
        cargo_volume: row.cargo_volume,
        start_time: parse_clock_time(&row.start_time)?,
        end_time: parse_clock_time(&row.end_time)?,
        priority,
    })
}

fn decode_csv_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s.trim_start_matches('\u{feff}')),
        Err(_) => {
            let (decoded, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            if had_errors {
                warn!("some characters could not be decoded from Windows-1252");
            }
            decoded
        }
    }
}
