//! Narrative route analysis report

use traxion_types::clock::format_clock_time;
use traxion_types::RouteRequest;

use crate::service::advisory::TimeWindowCheck;
use crate::service::capacity_validator::CapacityCheck;
use crate::service::estimator::{round_to_tenth, TripEstimate};

/// Five-section report built from already computed figures
pub fn generate_analysis_report(
    request: &RouteRequest,
    capacity: &CapacityCheck,
    estimate: &TripEstimate,
    window: &TimeWindowCheck,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          ANÁLISIS DETALLADO DE RUTA              \n");
    report.push_str("          Detailed Route Analysis                 \n");
    report.push_str("==================================================\n\n");

    report.push_str("1. VALIDACIÓN INICIAL / Capacity Check\n");
    report.push_str(&format!(
        "   - Unidad seleccionada: {} ({})\n",
        request.vehicle_type,
        request.vehicle_type.label()
    ));
    report.push_str(&format!("   - Capacidad máxima: {} toneladas\n", capacity.max_cargo_tons));
    report.push_str(&format!("   - Peso de carga: {} toneladas\n", request.cargo_weight));
    report.push_str(&format!(
        "   - Estado: {}\n\n",
        if capacity.is_overloaded { "EXCEDIDO" } else { "APROBADO" }
    ));

    report.push_str("2. CÁLCULO DE DISTANCIA / Distance\n");
    report.push_str(&format!("   - Ruta: {} → {}\n", request.origin, request.destination));
    report.push_str(&format!("   - Distancia estimada: {} km\n", estimate.distance_km.round()));
    report.push_str("   - Tipo de camino: 90% carretera, 10% zona urbana\n\n");

    report.push_str("3. CÁLCULO DE TIEMPOS / Time Breakdown\n");
    report.push_str(&format!(
        "   - Tiempo de conducción pura: {} horas\n",
        round_to_tenth(estimate.driving_time_hours)
    ));
    report.push_str(&format!(
        "   - Descansos obligatorios: {} horas ({} paradas)\n",
        round_to_tenth(estimate.rest_time_hours),
        estimate.required_breaks
    ));
    report.push_str(&format!(
        "   - Tiempo de carga/descarga: {} horas\n",
        round_to_tenth(estimate.loading_time_hours)
    ));
    report.push_str(&format!(
        "   - TIEMPO TOTAL ESTIMADO: {} horas\n\n",
        round_to_tenth(estimate.total_time_hours)
    ));

    report.push_str("4. VIABILIDAD EN VENTANA DE TIEMPO / Time Window\n");
    report.push_str(&format!("   - Hora de salida: {}\n", format_clock_time(&request.start_time)));
    report.push_str(&format!(
        "   - Hora estimada de llegada: {}\n",
        format_clock_time(&window.arrival_clock_time)
    ));
    report.push_str(&format!(
        "   - Límite de llegada: {}\n",
        format_clock_time(&request.end_time)
    ));
    report.push_str(&format!(
        "   - Estado: {}\n\n",
        if window.fits { "FACTIBLE" } else { "AJUSTES REQUERIDOS" }
    ));

    report.push_str("5. CONSIDERACIONES OPERATIVAS / Cost & Fuel\n");
    report.push_str(&format!(
        "   - Consumo estimado de combustible: {} litros\n",
        estimate.fuel_consumption_liters.round()
    ));
    report.push_str(&format!(
        "   - Costo estimado de combustible: ${} MXN\n",
        estimate.fuel_cost.round()
    ));
    report.push_str(&format!("   - Costo total estimado: ${} MXN\n", estimate.total_cost.round()));
    report.push_str("==================================================\n");

    report
}
