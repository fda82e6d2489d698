//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use traxion_types::clock::format_clock_time;
use traxion_types::{BatchResults, Error, Result};

/// Export batch results to Excel file
pub fn export_batch_to_excel(results: &BatchResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    let routes_sheet = workbook.add_worksheet();
    write_routes_sheet(routes_sheet, results)?;

    workbook.save(output_path).map_err(xlsx_error)?;

    Ok(())
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_error)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Traxion Route Analysis Report", &header_format)
        .map_err(xlsx_error)?;

    let rows: [(&str, f64); 6] = [
        ("Total Routes:", results.total_processed as f64),
        ("Viable:", results.viable as f64),
        ("Needs Adjustment:", results.needs_adjustment as f64),
        ("Not Viable:", results.not_viable as f64),
        ("Failed:", results.failed as f64),
        (
            "Duration (s):",
            (results.completed_at - results.started_at).num_milliseconds() as f64 / 1000.0,
        ),
    ];

    sheet.write_string(2, 0, "Analysis Date:").map_err(xlsx_error)?;
    sheet
        .write_string(2, 1, results.started_at.to_rfc3339())
        .map_err(xlsx_error)?;

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = 3 + i as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_error)?;
        sheet.write_number(row, 1, *value).map_err(xlsx_error)?;
    }

    sheet.set_column_width(0, 20.0).map_err(xlsx_error)?;
    sheet.set_column_width(1, 28.0).map_err(xlsx_error)?;

    Ok(())
}

fn write_routes_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet.set_name("Routes").map_err(xlsx_error)?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Row",
        "Origin",
        "Destination",
        "Vehicle",
        "Cargo (t)",
        "Start",
        "End",
        "Distance (km)",
        "Total Time (h)",
        "Driving (h)",
        "Rest (h)",
        "Loading (h)",
        "Fuel (L)",
        "Total Cost (MXN)",
        "Feasibility",
        "Warnings / Error",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_error)?;
    }

    for (i, entry) in results.entries.iter().enumerate() {
        let row = 1 + i as u32;
        let request = &entry.request;

        sheet.write_number(row, 0, entry.row as f64).map_err(xlsx_error)?;
        sheet.write_string(row, 1, &request.origin).map_err(xlsx_error)?;
        sheet.write_string(row, 2, &request.destination).map_err(xlsx_error)?;
        sheet
            .write_string(row, 3, request.vehicle_type.as_str())
            .map_err(xlsx_error)?;
        sheet.write_number(row, 4, request.cargo_weight).map_err(xlsx_error)?;
        sheet
            .write_string(row, 5, format_clock_time(&request.start_time))
            .map_err(xlsx_error)?;
        sheet
            .write_string(row, 6, format_clock_time(&request.end_time))
            .map_err(xlsx_error)?;

        match (&entry.result, &entry.error) {
            (Some(result), _) => {
                let s = &result.route_summary;
                let figures = [
                    s.total_distance_km,
                    s.total_time_hours,
                    s.driving_time_hours,
                    s.rest_time_hours,
                    s.loading_time_hours,
                    s.fuel_consumption_liters,
                    s.total_cost,
                ];
                for (offset, value) in figures.iter().enumerate() {
                    sheet
                        .write_number(row, 7 + offset as u16, *value)
                        .map_err(xlsx_error)?;
                }
                sheet
                    .write_string(row, 14, result.feasibility.label_en())
                    .map_err(xlsx_error)?;
                sheet
                    .write_string(row, 15, result.warnings.join("; "))
                    .map_err(xlsx_error)?;
            }
            (None, error) => {
                sheet.write_string(row, 14, "failed").map_err(xlsx_error)?;
                sheet
                    .write_string(row, 15, error.as_deref().unwrap_or(""))
                    .map_err(xlsx_error)?;
            }
        }
    }

    sheet.set_column_width(1, 16.0).map_err(xlsx_error)?;
    sheet.set_column_width(2, 16.0).map_err(xlsx_error)?;
    sheet.set_column_width(15, 60.0).map_err(xlsx_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use traxion_domain::RouteAnalysisEngine;
    use traxion_infra::parse_requests_csv;

    #[test]
    fn test_export_batch_workbook() {
        let csv = "origin,destination,vehicle_type,cargo_weight,cargo_volume,start_time,end_time\n\
                   CDMX,Monterrey,truck-40ft,5,10,08:00,20:00\n\
                   CDMX,Puebla,pickup-35tons,3,4,08:00,20:00\n\
                   ,Puebla,van-35tons,1,2,08:00,20:00\n";
        let requests = parse_requests_csv(csv.as_bytes()).unwrap();
        let engine = Arc::new(RouteAnalysisEngine::default());
        let results = crate::app::analyze_batch(engine, requests, 2, |_| {});

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.xlsx");
        export_batch_to_excel(&results, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
