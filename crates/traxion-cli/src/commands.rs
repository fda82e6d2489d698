//! Command implementations

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use traxion_app::app::{analyze_batch, analyze_request, build_engine, build_engine_from};
use traxion_app::config::Config;
use traxion_app::export::{
    build_export, default_export_file_name, export_analysis_json, export_batch_to_excel,
    load_batch_results, save_batch_results,
};
use traxion_domain::RouteAnalysisEngine;
use traxion_infra::load_requests_from_csv;
use traxion_types::{Error, OutputFormat, Priority, Result, RouteRequest, VehicleType};

use crate::cli::{Cli, Commands};
use crate::output::{output_result, output_routes, output_vehicles};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Execute the CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Analyze {
            origin,
            destination,
            vehicle,
            weight,
            volume,
            start,
            end,
            priority,
            export,
        } => {
            let engine = load_engine(cli.operational.as_ref(), &config)?;
            let request = build_request(
                origin,
                destination,
                vehicle,
                weight,
                volume,
                start,
                end,
                priority,
            );
            let export_path = export.map(|path| {
                path.unwrap_or_else(|| {
                    config
                        .export_dir()
                        .join(default_export_file_name(Utc::now()))
                })
            });
            cmd_analyze(&engine, &request, export_path, output_format)
        }

        Commands::Batch { csv, output, jobs } => {
            // 0 = auto CPU count
            let job_count = match jobs.unwrap_or(config.batch_jobs) {
                0 => num_cpus::get(),
                n => n,
            };
            let engine = load_engine(cli.operational.as_ref(), &config)?;
            cmd_batch(engine, csv, output, job_count, output_format, cli.verbose)
        }

        Commands::Export { results, output } => cmd_export(results, output),

        Commands::Routes => {
            let engine = load_engine(cli.operational.as_ref(), &config)?;
            output_routes(output_format, &engine)
        }

        Commands::Vehicles => {
            let engine = load_engine(cli.operational.as_ref(), &config)?;
            output_vehicles(output_format, &engine)
        }

        Commands::Config {
            show,
            set_output,
            set_operational,
            set_jobs,
            set_export_dir,
            reset,
        } => cmd_config(show, set_output, set_operational, set_jobs, set_export_dir, reset),
    }
}

/// CLI `--operational` wins over the config file
fn load_engine(operational: Option<&PathBuf>, config: &Config) -> Result<RouteAnalysisEngine> {
    match operational {
        Some(path) => {
            debug!(operational = %path.display(), "loading operational tables from argument");
            build_engine_from(Some(path.as_path()))
        }
        None => build_engine(config),
    }
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    origin: String,
    destination: String,
    vehicle_type: VehicleType,
    cargo_weight: f64,
    cargo_volume: f64,
    start_time: NaiveTime,
    end_time: NaiveTime,
    priority: Priority,
) -> RouteRequest {
    RouteRequest {
        origin,
        destination,
        vehicle_type,
        cargo_weight,
        cargo_volume,
        start_time,
        end_time,
        priority,
    }
}

fn cmd_analyze(
    engine: &RouteAnalysisEngine,
    request: &RouteRequest,
    export_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let result = analyze_request(engine, request)?;
    output_result(output_format, request, &result)?;

    if let Some(path) = export_path {
        export_analysis_json(&build_export(request, &result, Utc::now()), &path)?;
        eprintln!("Analysis saved to: {}", path.display());
    }

    Ok(())
}

fn cmd_batch(
    engine: RouteAnalysisEngine,
    csv_path: PathBuf,
    output: Option<PathBuf>,
    jobs: usize,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    // errors on a file without data rows
    let requests = load_requests_from_csv(&csv_path)?;

    let total = requests.len();
    if verbose {
        eprintln!("Found {} route requests, analyzing with {} parallel jobs", total, jobs);
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let progress = pb.clone();
    let results = analyze_batch(Arc::new(engine), requests, jobs, move |item| {
        progress.set_message(format!("{} -> {}", item.request.origin, item.request.destination));
        progress.inc(1);
    });
    pb.finish_with_message("done");
    info!(
        total = results.total_processed,
        failed = results.failed,
        "batch analysis finished"
    );

    if let Some(output_path) = output {
        save_batch_results(&results, &output_path)?;
        println!("Results saved to: {}", output_path.display());
    } else {
        println!("\nBatch Analysis Complete");
        println!("=======================");
        println!("Total:            {}", results.total_processed);
        println!("Viable:           {}", results.viable);
        println!("Needs adjustment: {}", results.needs_adjustment);
        println!("Not viable:       {}", results.not_viable);
        println!("Failed:           {}", results.failed);
        println!(
            "Duration:         {:.1}s",
            (results.completed_at - results.started_at).num_milliseconds() as f64 / 1000.0
        );

        for entry in results.entries.iter().filter(|e| e.error.is_some()) {
            eprintln!("Row {}: {}", entry.row, entry.error.as_deref().unwrap_or(""));
        }

        if output_format == OutputFormat::Json {
            let content = serde_json::to_string_pretty(&results)?;
            println!("\n{}", content);
        }
    }

    Ok(())
}

fn cmd_export(results_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !results_path.exists() {
        return Err(Error::FileNotFound(results_path.display().to_string()));
    }
    let results = load_batch_results(&results_path)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = results_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("results");
        results_path.with_file_name(format!("{}.xlsx", stem))
    });

    export_batch_to_excel(&results, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_operational: Option<PathBuf>,
    set_jobs: Option<usize>,
    set_export_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_operational {
        // must load before it is saved
        build_engine_from(Some(path.as_path()))?;
        config.operational_file = Some(path);
        modified = true;
    }

    if let Some(jobs) = set_jobs {
        config.batch_jobs = jobs;
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
