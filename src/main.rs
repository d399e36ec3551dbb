mod input;
mod model;
mod pipeline;
mod report;
mod telemetry;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::input::{InputError, load_dataset, load_profiles, load_weights};
use crate::model::errors::ModelError;
use crate::model::tables::ScoringTables;
use crate::model::thresholds::{ClassifierParams, DEFAULT_LAMBDA, Procedure, validate_lambda};
use crate::pipeline::stage2_score::{ScoringEngine, run_stage2};
use crate::pipeline::stage3_profiles::run_stage3;
use crate::pipeline::stage5_classify::{LabeledDataset, Stage5Inputs, run_stage5};
use crate::pipeline::stage6_report::{Stage6Input, write_reports};
use crate::report::json::render_profiles_json;
use crate::telemetry::TelemetryError;

#[derive(Debug, Parser)]
#[command(name = "supernutri", version, about = "Nutri-Score and ELECTRE TRI food classification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score, build profiles, classify and write reports.
    Run(RunArgs),
    /// Build boundary profiles from a dataset and write them as JSON.
    Profiles(ProfilesArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = ProcedureArg::Both)]
    procedure: ProcedureArg,
    /// Cutting level; repeat to sweep several thresholds.
    #[arg(long = "lambda")]
    lambdas: Vec<f64>,
    /// JSON object mapping each criterion to its weight.
    #[arg(long)]
    weights: Option<PathBuf>,
    /// JSON profiles (b1..b6) used instead of building them from the data.
    #[arg(long)]
    profiles: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Args)]
struct ProfilesArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProcedureArg {
    Pessimistic,
    Optimistic,
    Both,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Run(args) => {
            telemetry::init(&args.log_level)?;
            run_pipeline(&args)
        }
        Command::Profiles(args) => {
            telemetry::init(&args.log_level)?;
            run_profiles(&args)
        }
    }
}

fn run_pipeline(args: &RunArgs) -> Result<(), AppError> {
    let products = load_dataset(&args.input)?;

    let lambdas = dedup_lambdas(&args.lambdas)?;
    let params = match &args.weights {
        Some(path) => ClassifierParams::new(load_weights(path)?, lambdas[0])?,
        None => ClassifierParams::default_v1().with_lambda(lambdas[0])?,
    };
    let procedures = resolve_procedures(args.procedure);

    let engine = ScoringEngine::new(ScoringTables::nutriscore_v1());
    let stage2 = run_stage2(&products, &engine);

    let profiles = match &args.profiles {
        Some(path) => load_profiles(path)?,
        None => run_stage3(&products)?,
    };

    let dataset = run_stage5(
        LabeledDataset::new(products),
        &Stage5Inputs {
            params: &params,
            profiles: &profiles,
            lambdas: &lambdas,
            procedures: &procedures,
        },
    )?;

    let input = Stage6Input {
        dataset: &dataset,
        scores: &stage2.results,
        verification: stage2.verification,
        profiles: &profiles,
        params: &params,
        lambdas: &lambdas,
        input_path: args.input.display().to_string(),
        tool_name: "supernutri".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;
    Ok(())
}

fn run_profiles(args: &ProfilesArgs) -> Result<(), AppError> {
    let products = load_dataset(&args.input)?;
    let profiles = run_stage3(&products)?;
    write_json(&args.out, &render_profiles_json(&profiles)?)?;
    info!(out = %args.out.display(), "profiles written");
    Ok(())
}

fn write_json(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

fn resolve_procedures(arg: ProcedureArg) -> Vec<Procedure> {
    match arg {
        ProcedureArg::Pessimistic => vec![Procedure::Pessimistic],
        ProcedureArg::Optimistic => vec![Procedure::Optimistic],
        ProcedureArg::Both => Procedure::ALL.to_vec(),
    }
}

/// Validates every threshold and drops repeats, keeping first-seen order.
/// An empty list falls back to the default cutting level.
fn dedup_lambdas(raw: &[f64]) -> Result<Vec<f64>, ModelError> {
    if raw.is_empty() {
        return Ok(vec![DEFAULT_LAMBDA]);
    }
    let mut out: Vec<f64> = Vec::with_capacity(raw.len());
    for &lambda in raw {
        let lambda = validate_lambda(lambda)?;
        if !out.iter().any(|&seen| seen == lambda) {
            out.push(lambda);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
