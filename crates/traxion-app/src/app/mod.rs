//! Application use cases

mod analysis_service;

pub use analysis_service::{analyze_batch, analyze_request, build_engine, build_engine_from};
