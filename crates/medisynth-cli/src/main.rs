use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use medisynth_generate::output::write_dataset;
use medisynth_generate::{SynthesisError, SynthesisOptions, Synthesizer, TableCounts};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),
}

#[derive(Parser, Debug)]
#[command(name = "medisynth", version, about = "Synthetic medical-records fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

/// Generate a fixture dataset and write one JSON file per table.
#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output directory for the generated files.
    #[arg(long, default_value = "sample_data")]
    out_dir: PathBuf,
    /// Seed for the deterministic generator; drawn from OS entropy when
    /// omitted. The effective seed is always printed.
    #[arg(long)]
    seed: Option<u64>,
    /// Patient records to generate.
    #[arg(long, default_value_t = 100)]
    patients: u64,
    /// Doctor accounts to generate; these also form the doctor reference
    /// pool for dependent tables.
    #[arg(long, default_value_t = 20)]
    doctors: u64,
    /// Support staff accounts to generate.
    #[arg(long, default_value_t = 30)]
    staff: u64,
    /// Medical records to generate.
    #[arg(long, default_value_t = 200)]
    medical_records: u64,
    /// Appointments to generate.
    #[arg(long, default_value_t = 300)]
    appointments: u64,
    /// Prescriptions to generate.
    #[arg(long, default_value_t = 250)]
    prescriptions: u64,
    /// Lab results to generate.
    #[arg(long, default_value_t = 200)]
    lab_results: u64,
    /// Audit log entries to generate.
    #[arg(long, default_value_t = 500)]
    audit_logs: u64,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        out_dir,
        seed,
        patients,
        doctors,
        staff,
        medical_records,
        appointments,
        prescriptions,
        lab_results,
        audit_logs,
    } = args;

    let options = SynthesisOptions {
        seed,
        timestamp: None,
        counts: TableCounts {
            patients,
            doctors,
            staff,
            medical_records,
            appointments,
            prescriptions,
            lab_results,
            audit_logs,
        },
    };

    let start = Instant::now();
    let mut synthesizer = Synthesizer::new(options);
    let seed = synthesizer.seed();

    let dataset = synthesizer.synthesize()?;
    let reports = write_dataset(&out_dir, &dataset)?;
    tracing::info!(
        event = "dataset_written",
        out_dir = %out_dir.display(),
        tables = reports.len()
    );

    for report in &reports {
        println!(
            "Generated {} {} records in {}",
            report.records,
            report.table,
            report.path.display()
        );
    }
    println!("seed={seed}");
    println!("out_dir={}", out_dir.display());
    println!("duration_ms={}", start.elapsed().as_millis());

    Ok(())
}
