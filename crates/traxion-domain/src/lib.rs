//! Route analysis domain: operational tables and the analysis engine
//!
//! Every analysis is a pure function of the request plus the tables the
//! engine was constructed with.

pub mod engine;
pub mod model;
pub mod service;

pub use engine::RouteAnalysisEngine;
