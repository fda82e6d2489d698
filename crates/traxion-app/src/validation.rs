//! Request validation applied before a request reaches the engine

use traxion_types::{Error, Result, RouteRequest};

/// Check the fields the form requires. All failures are reported together.
pub fn validate_request(request: &RouteRequest) -> Result<()> {
    let mut problems = Vec::new();

    if request.origin.trim().is_empty() {
        problems.push("El origen es requerido");
    }
    if request.destination.trim().is_empty() {
        problems.push("El destino es requerido");
    }
    if !request.cargo_weight.is_finite() {
        problems.push("El peso debe ser un número válido");
    } else if request.cargo_weight <= 0.0 {
        problems.push("El peso debe ser mayor a 0");
    }
    if !request.cargo_volume.is_finite() {
        problems.push("El volumen debe ser un número válido");
    } else if request.cargo_volume <= 0.0 {
        problems.push("El volumen debe ser mayor a 0");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidRequest(problems.join("; ")))
    }
}
