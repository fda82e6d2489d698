//! Output formatting module

use traxion_domain::RouteAnalysisEngine;
use traxion_types::clock::format_clock_time;
use traxion_types::{EfficiencyGrade, OutputFormat, Result, RouteAnalysisResult, RouteRequest};

pub fn output_result(
    output_format: OutputFormat,
    request: &RouteRequest,
    result: &RouteAnalysisResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
        return Ok(());
    }

    println!("{}", result.narrative);

    let s = &result.route_summary;
    let score = s.efficiency_score();
    println!("\nResumen / Summary");
    println!("=================");
    println!("Ruta:            {} -> {}", request.origin, request.destination);
    println!("Unidad:          {}", request.vehicle_type.label());
    println!("Prioridad:       {}", request.priority.label());
    println!("Distancia:       {} km", s.total_distance_km);
    println!("Tiempo total:    {} h", s.total_time_hours);
    println!("  Conducción:    {} h", s.driving_time_hours);
    println!("  Descansos:     {} h", s.rest_time_hours);
    println!("  Carga:         {} h", s.loading_time_hours);
    println!("Combustible:     {} L", s.fuel_consumption_liters);
    println!("Costo total:     ${}", s.total_cost);
    println!(
        "Eficiencia:      {}/100 ({})",
        score,
        EfficiencyGrade::from_score(score).label()
    );
    println!("Dictamen:        {}", result.feasibility.label());

    println!("\nItinerario / Timeline");
    println!("{}", "-".repeat(72));
    println!("{:>3}  {:<5}  {:>7}  {}", "#", "Hora", "km", "Actividad");
    println!("{}", "-".repeat(72));
    for step in &result.timeline {
        println!(
            "{:>3}  {:<5}  {:>7.0}  {} [{}]",
            step.step_number,
            format_clock_time(&step.estimated_clock_time),
            step.cumulative_distance_km,
            step.description,
            step.activity_kind.label()
        );
    }

    print_list("Advertencias / Warnings", &result.warnings);
    print_list("Recomendaciones / Recommendations", &result.recommendations);
    print_list("Supuestos / Assumptions", &result.assumptions);

    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}", title);
    for item in items {
        println!("  - {}", item);
    }
}

pub fn output_routes(output_format: OutputFormat, engine: &RouteAnalysisEngine) -> Result<()> {
    let table = engine.distances();
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "routes": table.routes().iter().map(|r| serde_json::json!({
                "origin": r.origin,
                "destination": r.destination,
                "distanceKm": r.distance_km,
            })).collect::<Vec<_>>(),
            "fallbackDistanceKm": table.fallback_km(),
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRoutes");
    println!("======");
    println!("{:<20} {:<20} {:>10}", "Origin", "Destination", "km");
    println!("{}", "-".repeat(52));
    for route in table.routes() {
        println!("{:<20} {:<20} {:>10}", route.origin, route.destination, route.distance_km);
    }
    println!("\nUnknown pairs: {} km", table.fallback_km());
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, engine: &RouteAnalysisEngine) -> Result<()> {
    let config = engine.config();
    if output_format == OutputFormat::Json {
        let vehicles: Vec<_> = config
            .vehicles()
            .map(|v| {
                serde_json::json!({
                    "vehicleType": v.vehicle_type,
                    "label": v.vehicle_type.label(),
                    "kmPerLiter": v.km_per_liter,
                    "maxCargoTons": v.max_cargo_tons,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    println!("\nVehicles");
    println!("========");
    println!("{:<15} {:<20} {:>8} {:>10}", "Type", "Label", "km/L", "Max (t)");
    println!("{}", "-".repeat(56));
    for v in config.vehicles() {
        println!(
            "{:<15} {:<20} {:>8} {:>10}",
            v.vehicle_type.as_str(),
            v.vehicle_type.label(),
            v.km_per_liter,
            v.max_cargo_tons
        );
    }
    Ok(())
}
