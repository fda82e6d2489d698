//! On-road timeline: start, driving/rest pairs, arrival
//!
//! Loading time is not part of the timeline, so the arrival clock time here
//! is earlier than start + summary total time. Clock times wrap at 24h with
//! no day tracking.

use chrono::{Duration, NaiveTime};
use traxion_types::{ActivityKind, RouteRequest, TimelineStep};

use crate::model::OperationalConfig;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Advance a time of day by fractional hours, rounded to the minute, wrapping at midnight.
///
/// Non-finite offsets leave the time unchanged.
pub fn add_hours(start: NaiveTime, hours: f64) -> NaiveTime {
    let minutes = (hours * 60.0).round();
    if !minutes.is_finite() {
        return start;
    }
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY) as i64;
    let (time, _wrapped_seconds) = start.overflowing_add_signed(Duration::minutes(minutes));
    time
}

pub fn generate_timeline(
    config: &OperationalConfig,
    request: &RouteRequest,
    distance_km: f64,
    driving_time_hours: f64,
    required_breaks: u32,
) -> Vec<TimelineStep> {
    let rules = config.rules();
    let break_hours = rules.break_duration_hours();
    let segment_distance = distance_km / (f64::from(required_breaks) + 1.0);
    let segment_hours = segment_distance / rules.average_speed_highway_kmh;

    let mut timeline = Vec::with_capacity(2 * required_breaks as usize + 2);
    let mut accumulated_distance = 0.0;
    let mut accumulated_hours = 0.0;

    push_step(
        &mut timeline,
        format!("Salida de {}", request.origin),
        0.0,
        request.start_time,
        ActivityKind::Start,
        "Inicio del viaje. Verificación de carga y documentos.".to_string(),
    );

    for i in 1..=required_breaks {
        accumulated_distance += segment_distance;
        accumulated_hours += segment_hours;
        let clock = add_hours(request.start_time, accumulated_hours);

        push_step(
            &mut timeline,
            format!("Segmento de conducción {}", i),
            accumulated_distance.round(),
            clock,
            ActivityKind::Driving,
            format!(
                "Conducción continua. Velocidad promedio: {} km/h",
                rules.average_speed_highway_kmh
            ),
        );
        push_step(
            &mut timeline,
            format!("Parada de descanso obligatorio {}", i),
            accumulated_distance.round(),
            clock,
            ActivityKind::Rest,
            format!(
                "Descanso de {} minutos. Revisión básica del vehículo.",
                rules.break_duration_minutes
            ),
        );

        accumulated_hours += break_hours;
    }

    let on_road_hours = driving_time_hours + f64::from(required_breaks) * break_hours;
    push_step(
        &mut timeline,
        format!("Llegada a {}", request.destination),
        distance_km.round(),
        add_hours(request.start_time, on_road_hours),
        ActivityKind::Arrival,
        "Llegada al destino. Inicio de descarga.".to_string(),
    );

    timeline
}

fn push_step(
    timeline: &mut Vec<TimelineStep>,
    description: String,
    cumulative_distance_km: f64,
    estimated_clock_time: NaiveTime,
    activity_kind: ActivityKind,
    details: String,
) {
    timeline.push(TimelineStep {
        step_number: timeline.len() as u32 + 1,
        description,
        cumulative_distance_km,
        estimated_clock_time,
        activity_kind,
        details,
    });
}
