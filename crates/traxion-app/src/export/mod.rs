//! Export of analysis results

mod excel;
mod json;

pub use excel::export_batch_to_excel;
pub use json::{
    build_export, default_export_file_name, export_analysis_json, load_batch_results,
    save_batch_results,
};
