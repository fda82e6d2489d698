//! JSON export of single analyses and batch results

use std::path::Path;

use chrono::{DateTime, Utc};
use traxion_types::{AnalysisExport, BatchResults, Result, RouteAnalysisResult, RouteRequest};

pub fn build_export(
    request: &RouteRequest,
    result: &RouteAnalysisResult,
    timestamp: DateTime<Utc>,
) -> AnalysisExport {
    AnalysisExport {
        route_data: request.clone(),
        analysis: result.clone(),
        timestamp,
    }
}

/// `ruta-traxion-YYYY-MM-DD.json`
pub fn default_export_file_name(timestamp: DateTime<Utc>) -> String {
    format!("ruta-traxion-{}.json", timestamp.format("%Y-%m-%d"))
}

pub fn export_analysis_json(export: &AnalysisExport, output_path: &Path) -> Result<()> {
    write_pretty(export, output_path)
}

pub fn save_batch_results(results: &BatchResults, output_path: &Path) -> Result<()> {
    write_pretty(results, output_path)
}

pub fn load_batch_results(path: &Path) -> Result<BatchResults> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_pretty<T: serde::Serialize>(value: &T, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(output_path, content)?;
    Ok(())
}
