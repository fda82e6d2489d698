//! Route analysis use cases: single requests and parallel batches

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use chrono::Utc;
use tracing::{debug, info, warn};
use traxion_domain::RouteAnalysisEngine;
use traxion_infra::{CsvRequest, OperationalTables};
use traxion_types::{
    BatchEntry, BatchResults, Error, Feasibility, Result, RouteAnalysisResult, RouteRequest,
};

use crate::config::Config;
use crate::validation::validate_request;

/// Build the engine from the configured operational tables (built-in when unset)
pub fn build_engine(config: &Config) -> Result<RouteAnalysisEngine> {
    build_engine_from(config.operational_file.as_deref())
}

pub fn build_engine_from(operational_file: Option<&Path>) -> Result<RouteAnalysisEngine> {
    let tables = match operational_file {
        Some(path) => OperationalTables::load_from_file(path)?,
        None => OperationalTables::default(),
    };
    Ok(tables.into_engine())
}

/// Validate then analyze one request
pub fn analyze_request(
    engine: &RouteAnalysisEngine,
    request: &RouteRequest,
) -> Result<RouteAnalysisResult> {
    validate_request(request)?;
    engine.analyze(request)
}

/// Analyze requests on `jobs` worker threads sharing one engine.
///
/// Failed rows, including rows whose analysis panics, are recorded in the
/// results rather than aborting the batch. `on_progress` is called once per
/// finished request from worker threads.
pub fn analyze_batch<F>(
    engine: Arc<RouteAnalysisEngine>,
    requests: Vec<CsvRequest>,
    jobs: usize,
    on_progress: F,
) -> BatchResults
where
    F: Fn(&CsvRequest) + Send + Sync + 'static,
{
    run_batch(
        requests,
        jobs,
        move |request| analyze_request(&engine, request),
        on_progress,
    )
}

fn run_batch<A, F>(
    requests: Vec<CsvRequest>,
    jobs: usize,
    analyze: A,
    on_progress: F,
) -> BatchResults
where
    A: Fn(&RouteRequest) -> Result<RouteAnalysisResult> + Send + Sync + 'static,
    F: Fn(&CsvRequest) + Send + Sync + 'static,
{
    let total = requests.len();
    let jobs = jobs.clamp(1, total.max(1));
    info!(total, jobs, "starting batch analysis");

    let started_at = Utc::now();
    let requests = Arc::new(requests);
    let next_index = Arc::new(AtomicUsize::new(0));
    let analyze = Arc::new(analyze);
    let on_progress = Arc::new(on_progress);
    let entries = Arc::new(Mutex::new(Vec::with_capacity(total)));

    let mut handles = Vec::with_capacity(jobs);
    for worker_id in 0..jobs {
        let requests = Arc::clone(&requests);
        let next_index = Arc::clone(&next_index);
        let analyze = Arc::clone(&analyze);
        let on_progress = Arc::clone(&on_progress);
        let entries = Arc::clone(&entries);

        handles.push(thread::spawn(move || loop {
            let idx = next_index.fetch_add(1, Ordering::SeqCst);
            if idx >= requests.len() {
                break;
            }

            let item = &requests[idx];
            debug!(worker_id, row = item.row, "analyzing");
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (*analyze)(&item.request)))
                .unwrap_or_else(|payload| {
                    Err(Error::AnalysisPanic(panic_message(payload.as_ref())))
                });

            let entry = match outcome {
                Ok(result) => BatchEntry {
                    row: item.row,
                    request: item.request.clone(),
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!(row = item.row, error = %e, "row failed");
                    BatchEntry {
                        row: item.row,
                        request: item.request.clone(),
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            lock_entries(&entries).push(entry);
            (*on_progress)(item);
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            warn!("batch worker panicked outside row analysis");
        }
    }

    let mut entries = std::mem::take(&mut *lock_entries(&entries));
    entries.sort_by_key(|e| e.row);

    let count = |verdict: Feasibility| {
        entries
            .iter()
            .filter(|e| e.result.as_ref().map(|r| r.feasibility) == Some(verdict))
            .count()
    };
    let viable = count(Feasibility::Viable);
    let needs_adjustment = count(Feasibility::NeedsAdjustment);
    let not_viable = count(Feasibility::NotViable);
    let failed = entries.iter().filter(|e| e.result.is_none()).count();

    BatchResults {
        total_processed: entries.len(),
        viable,
        needs_adjustment,
        not_viable,
        failed,
        entries,
        started_at,
        completed_at: Utc::now(),
    }
}

/// Entries are pushed whole, so a poisoned lock still holds consistent data
fn lock_entries(entries: &Mutex<Vec<BatchEntry>>) -> MutexGuard<'_, Vec<BatchEntry>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traxion_types::clock::parse_clock_time;
    use traxion_types::{Priority, VehicleType};

    fn csv_request(row: usize, origin: &str, vehicle_type: VehicleType, cargo: f64) -> CsvRequest {
        CsvRequest {
            row,
            request: RouteRequest {
                origin: origin.to_string(),
                destination: "Monterrey".to_string(),
                vehicle_type,
                cargo_weight: cargo,
                cargo_volume: 10.0,
                start_time: parse_clock_time("08:00").unwrap(),
                end_time: parse_clock_time("20:00").unwrap(),
                priority: Priority::Cost,
            },
        }
    }

    #[test]
    fn test_analyze_request_validates() {
        let engine = RouteAnalysisEngine::default();
        let req = csv_request(1, "", VehicleType::Truck40ft, 5.0).request;
        assert!(matches!(analyze_request(&engine, &req), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_batch_counts_and_order() {
        let engine = Arc::new(RouteAnalysisEngine::default());
        let requests = vec![
            csv_request(1, "CDMX", VehicleType::Truck40ft, 5.0),
            csv_request(2, "Guadalajara", VehicleType::Pickup35Tons, 3.0),
            csv_request(3, "", VehicleType::Truck40ft, 5.0),
            // fallback 300 km: 5 h driving + 1 break + 1 h loading, arrives 14:30
            csv_request(4, "Puebla", VehicleType::Van35Tons, 2.0),
        ];
        let progress = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&progress);

        let results = analyze_batch(engine, requests, 3, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(progress.load(Ordering::SeqCst), 4);
        assert_eq!(results.total_processed, 4);
        assert_eq!(results.needs_adjustment, 1);
        assert_eq!(results.not_viable, 1);
        assert_eq!(results.viable, 1);
        assert_eq!(results.failed, 1);
        let rows: Vec<_> = results.entries.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);
        assert!(results.entries[2].error.as_deref().unwrap().contains("origen"));
    }

    #[test]
    fn test_batch_matches_single_analysis() {
        let engine = Arc::new(RouteAnalysisEngine::default());
        let item = csv_request(1, "CDMX", VehicleType::Trailer53ft, 12.0);
        let single = engine.analyze(&item.request).unwrap();
        let results = analyze_batch(Arc::clone(&engine), vec![item], 8, |_| {});
        assert_eq!(results.entries[0].result.as_ref(), Some(&single));
    }

    #[test]
    fn test_panicking_row_is_recorded_as_failed() {
        let engine = RouteAnalysisEngine::default();
        let requests = vec![
            csv_request(1, "CDMX", VehicleType::Truck40ft, 5.0),
            csv_request(2, "Guadalajara", VehicleType::Truck40ft, 5.0),
            csv_request(3, "Puebla", VehicleType::Van35Tons, 2.0),
        ];

        let results = run_batch(
            requests,
            1,
            move |request| {
                if request.origin == "Guadalajara" {
                    panic!("table corrupted");
                }
                engine.analyze(request)
            },
            |_| {},
        );

        assert_eq!(results.total_processed, 3);
        assert_eq!(results.failed, 1);
        assert!(results.entries[0].result.is_some());
        assert!(results.entries[2].result.is_some());
        let error = results.entries[1].error.as_deref().unwrap();
        assert!(error.contains("table corrupted"));
    }

    #[test]
    fn test_huge_cargo_row_does_not_drop_batch() {
        let requests = vec![
            csv_request(1, "CDMX", VehicleType::Truck40ft, 5.0),
            csv_request(2, "CDMX", VehicleType::Truck40ft, 1e15),
            csv_request(3, "Puebla", VehicleType::Van35Tons, 2.0),
        ];
        let results = analyze_batch(Arc::new(RouteAnalysisEngine::default()), requests, 1, |_| {});

        assert_eq!(results.total_processed, 3);
        assert_eq!(results.failed, 0);
        assert_eq!(results.not_viable, 1);
    }

    #[test]
    fn test_empty_batch() {
        let engine = Arc::new(RouteAnalysisEngine::default());
        let results = analyze_batch(engine, Vec::new(), 4, |_| {});
        assert_eq!(results.total_processed, 0);
        assert!(results.entries.is_empty());
    }
}
