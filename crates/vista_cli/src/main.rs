//! Vista CLI
//!
//! Runs headless landing page scenarios and samples the configured scroll
//! mapping.
//!
//! ```text
//! vista run scenario.json --config vista.toml --report out/report.json
//! vista sample --steps 20
//! vista init
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vista_app::{
    run_scenario_with_store, scroll_pass, HeadlessScenario, PageConfig, RunOutcome,
    MAX_SAMPLE_STEPS,
};
use vista_theme::{FileStore, MemoryStore};

/// Headless runner for the Vista landing page
#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(about = "Run headless Vista landing page scenarios")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario and print its JSON report
    Run {
        /// Scenario file (JSON)
        scenario: PathBuf,

        /// Configuration file or directory containing vista.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write the report to this relative path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Print progress, opacity and scale over a full scroll pass
    Sample {
        /// Number of intervals between the first and last offset
        #[arg(
            short,
            long,
            default_value = "20",
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SAMPLE_STEPS))
        )]
        steps: u32,

        /// Configuration file or directory containing vista.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a vista.toml with the default settings
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            scenario,
            config,
            report,
        } => cmd_run(&scenario, config.as_deref(), report.as_deref()),
        Commands::Sample {
            steps,
            config,
            json,
        } => cmd_sample(steps, config.as_deref(), json).map(|_| ExitCode::SUCCESS),
        Commands::Init { dir } => cmd_init(&dir).map(|_| ExitCode::SUCCESS),
    };

    result.unwrap_or_else(|err| {
        tracing::error!("{err:#}");
        ExitCode::from(2)
    })
}

fn cmd_run(
    scenario_path: &Path,
    config: Option<&Path>,
    report: Option<&Path>,
) -> Result<ExitCode> {
    let config = config::load_config(config)?;
    let scenario = HeadlessScenario::from_path(scenario_path)?;

    tracing::info!(
        scenario = %scenario_path.display(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let outcome = match &config.theme.store {
        Some(path) => {
            tracing::debug!(store = %path.display(), "using file preference store");
            run_scenario_with_store(&scenario, &config, FileStore::new(path))?
        }
        None => run_scenario_with_store(&scenario, &config, MemoryStore::new())?,
    };

    let result = outcome.report();
    result.write_to_writer(&mut std::io::stdout().lock())?;
    if let Some(path) = report {
        result.write_to_path(path)?;
        tracing::info!(report = %path.display(), "report written");
    }

    Ok(match outcome {
        RunOutcome::Passed { report } => {
            tracing::info!(frames = report.elapsed_frames, "scenario passed");
            ExitCode::SUCCESS
        }
        RunOutcome::Failed { report } => {
            tracing::warn!(
                step = ?report.failed_step_index,
                assertion = ?report.assertion,
                "scenario failed"
            );
            ExitCode::FAILURE
        }
    })
}

fn cmd_sample(steps: u32, config: Option<&Path>, json: bool) -> Result<()> {
    let config: PageConfig = config::load_config(config)?;
    let samples = scroll_pass(&config, steps).context("invalid [section] configuration")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "{:>10}  {:>8}  {:>7}  {:>5}",
        "offset", "progress", "opacity", "scale"
    );
    for sample in &samples {
        println!(
            "{:>10.1}  {:>8.3}  {:>7.3}  {:>5.3}",
            sample.offset, sample.progress, sample.opacity, sample.scale
        );
    }
    Ok(())
}

fn cmd_init(dir: &Path) -> Result<()> {
    let path = config::init(dir)?;
    tracing::info!("created {}", path.display());
    Ok(())
}
