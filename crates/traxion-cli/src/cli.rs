//! CLI definition using clap

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use traxion_types::clock::parse_clock_time;
use traxion_types::{OutputFormat, Priority, VehicleType};

#[derive(Parser)]
#[command(name = "traxion")]
#[command(author = "traxion")]
#[command(version)]
#[command(about = "Heavy-cargo route feasibility analysis: time, fuel, cost and schedule")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Operational tables TOML. Uses config value (or built-in tables) if not specified.
    #[arg(long, global = true)]
    pub operational: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log filter directive (e.g. "info", "traxion_domain=debug"). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single route
    Analyze {
        /// Origin city
        #[arg(long)]
        origin: String,

        /// Destination city
        #[arg(long)]
        destination: String,

        /// Vehicle type
        #[arg(long, value_enum)]
        vehicle: VehicleType,

        /// Cargo weight in tons
        #[arg(long)]
        weight: f64,

        /// Cargo volume in cubic meters
        #[arg(long)]
        volume: f64,

        /// Departure time (HH:MM)
        #[arg(long, default_value = "08:00", value_parser = parse_time_arg)]
        start: NaiveTime,

        /// Latest acceptable arrival (HH:MM)
        #[arg(long, default_value = "20:00", value_parser = parse_time_arg)]
        end: NaiveTime,

        /// Planning priority
        #[arg(long, value_enum, default_value_t = Priority::Cost)]
        priority: Priority,

        /// Save the analysis as JSON.
        /// Without a path, writes ruta-traxion-YYYY-MM-DD.json to the export dir.
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Batch analyze route requests from a CSV file
    Batch {
        /// Path to CSV file
        csv: PathBuf,

        /// Output file for results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Number of parallel analyses. 0 = auto (CPU count). Uses config value if not specified.
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
    },

    /// Export batch results to Excel
    Export {
        /// Path to JSON results file
        results: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the distance table
    Routes,

    /// List vehicle types with fuel rate and capacity
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set operational tables TOML
        #[arg(long)]
        set_operational: Option<PathBuf>,

        /// Set default batch jobs (0 = CPU count)
        #[arg(long)]
        set_jobs: Option<usize>,

        /// Set export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    parse_clock_time(s).map_err(|e| e.to_string())
}
