//! Infrastructure layer - file loaders for operational tables and batch requests

pub mod operational_toml;
pub mod request_csv;

pub use operational_toml::OperationalTables;
pub use request_csv::{load_requests_from_csv, parse_requests_csv, CsvRequest};
