//! gcode-extract - CLI tool to extract cutting parameters from NC programs.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use gcode_extract::{
    analyze_file, collect_program_files, estimate, validate_results, AnalyzerConfig, Estimate,
    ExtractionResult, FeatureVector,
};

/// Extract feed rate, spindle speed and depth of cut from CNC lathe programs.
#[derive(Parser, Debug)]
#[command(name = "gcode-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Program files or directories (.nc, .txt, .gcode, .tap)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON configuration file (defaults, tool-life model, tariffs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Predicted power draw in watts, enables tool-life and cost estimates
    #[arg(short, long)]
    power: Option<f64>,

    /// Validate only, fail if any result is unusable as model input
    #[arg(long)]
    validate: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// One row of output.
#[derive(Serialize)]
struct Report {
    file: String,
    #[serde(flatten)]
    result: ExtractionResult,
    /// Scaler input order: [feed_rate, depth_of_cut, spindle_speed].
    features: Option<[f64; 3]>,
    estimate: Option<Estimate>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No program files found");
    }
    info!("Processing {} program file(s)", files.len());

    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let result = analyze_file(path, &config.extractor)
            .with_context(|| format!("Failed to analyze {}", path.display()))?;
        results.push((path.display().to_string(), result));
    }

    let validation = validate_results(&results);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    if args.validate {
        for err in &validation.errors {
            error!("{}", err);
        }
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    let mut reports = Vec::with_capacity(results.len());
    for (file, result) in results {
        let features = FeatureVector::try_from(&result).ok();
        let est = match (args.power, features) {
            (Some(power), Some(features)) => Some(
                estimate(&features, power, &config.tool_life, &config.tariffs)
                    .with_context(|| format!("Failed to estimate {}", file))?,
            ),
            (Some(_), None) => {
                warn!("{}: skipping estimate, features are not all positive", file);
                None
            }
            (None, _) => None,
        };
        reports.push(Report {
            file,
            result,
            features: features.map(|f| f.as_array()),
            estimate: est,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

/// Expand directories into their program files; keep plain paths as given.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(
                collect_program_files(input)
                    .with_context(|| format!("Failed to scan {}", input.display()))?,
            );
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn print_report(report: &Report) {
    println!("{}", report.file);
    println!("  {}", report.result);
    if let Some(est) = &report.estimate {
        println!(
            "  power={} W source={} tool_life={} min",
            est.power_w, est.source, est.tool_life_min
        );
        println!(
            "  energy={:.3} kWh cost: solar={} grid={}",
            est.energy_kwh, est.cost.solar, est.cost.grid
        );
    }
}
