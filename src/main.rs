use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat, init_tracing, load_config};
use dataset::{CsvSource, DatasetCache};
use navigator::{QueryRegistry, Section};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod menu;
mod render;

/// The main entry point for the Teleinsight reporting tool.
fn main() -> ExitCode {
    // A .env file is optional; real environment variables still apply without one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match load_settings(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // The guard flushes the file appender when `main` returns.
    let _guard = match init_tracing(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Operational insight reports over a telecom customer dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file. Missing files are fine; defaults and environment apply.
    #[arg(long, global = true, default_value = "teleinsight.toml")]
    config: PathBuf,

    /// Customer CSV to load, overriding `dataset.path`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// How results are printed.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Defaults to the interactive menu.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the report sections.
    Sections,
    /// Run a single section, by name, slug or menu number.
    Show {
        /// e.g. "Churn Risk Analysis", "churn-risk-analysis" or "2".
        section: Option<String>,
    },
    /// Run every section in menu order.
    Report,
    /// Pick sections interactively.
    Menu,
}

fn load_settings(cli: &Cli) -> Result<Config> {
    let mut config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(path) = &cli.data {
        config.dataset.path = path.clone();
    }
    Ok(config)
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli, config: Config) -> Result<()> {
    let registry = QueryRegistry::standard(&config.reports);
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Sections => {
            render::write_sections(&mut out, &registry.sections(), cli.format)?;
        }
        Commands::Show { section } => {
            let cache = open_dataset(&config)?;
            let key = section.unwrap_or_else(|| Section::default().key().to_string());
            let dataset = cache.get()?;
            let report = registry.run_key(&key, &dataset)?;
            render::write_reports(&mut out, &[report], cli.format)?;
        }
        Commands::Report => {
            let cache = open_dataset(&config)?;
            let dataset = cache.get()?;
            let reports = registry
                .sections()
                .into_iter()
                .map(|section| registry.run(section, &dataset))
                .collect::<Result<Vec<_>, _>>()?;
            render::write_reports(&mut out, &reports, cli.format)?;
        }
        Commands::Menu => {
            let cache = open_dataset(&config)?;
            menu::run(&cache, &registry, cli.format, io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}

/// Builds the dataset cache and loads it straight away, so an unusable file
/// ends the run before any section is shown.
fn open_dataset(config: &Config) -> Result<DatasetCache<CsvSource>> {
    let path = &config.dataset.path;
    let cache = DatasetCache::new(CsvSource::new(path.clone()));
    let dataset = cache
        .get()
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    tracing::info!(
        rows = dataset.len(),
        customers = dataset.distinct_customers(),
        "Dataset ready"
    );
    Ok(cache)
}
