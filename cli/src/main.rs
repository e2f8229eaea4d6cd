use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scripture_db::LoaderConfig;
use scripture_sqlite::{Migration, Progress};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "scripture-load")]
#[command(about = "Load scripture corpora into a normalized SQLite verse table")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Defaults to `load` when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the verse table if needed and load every corpus.
    Load,
    /// Drop the verse table, recreate it, and load every corpus.
    Refresh,
    /// Show table status and per-source verse counts.
    Status,
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Path to a YAML loader configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory containing the corpus JSON files (overrides the config).
    #[arg(long, global = true)]
    texts_dir: Option<PathBuf>,
    /// SQLite database file (overrides the config).
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let result = resolve_config(&cli.common).and_then(|config| {
        match cli.command.unwrap_or(Command::Load) {
            Command::Load => run_load(&config),
            Command::Refresh => run_refresh(&config),
            Command::Status => run_status(&config),
        }
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = format!(
        "scripture_load={level},scripture_core={level},scripture_db={level},scripture_sqlite={level}"
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the YAML config if given, otherwise defaults, then applies CLI overrides.
fn resolve_config(args: &CommonArgs) -> Result<LoaderConfig, String> {
    let mut config = match &args.config {
        Some(path) => LoaderConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?,
        None => LoaderConfig::default(),
    };
    if let Some(texts_dir) = &args.texts_dir {
        config.texts_dir = texts_dir.clone();
    }
    if let Some(db) = &args.db {
        config.database = db.clone();
    }
    debug!(
        texts_dir = %config.texts_dir.display(),
        database = %config.database.display(),
        corpora = config.corpora.len(),
        "Resolved loader configuration"
    );
    Ok(config)
}

fn open_migration(config: &LoaderConfig) -> Result<Migration, String> {
    let conn = rusqlite::Connection::open(&config.database).map_err(|e| {
        format!(
            "Failed to open database '{}': {e}",
            config.database.display()
        )
    })?;
    Ok(Migration::new(conn))
}

fn run_load(config: &LoaderConfig) -> Result<(), String> {
    let mut migration = open_migration(config)?;
    migration
        .ingest(config, print_progress)
        .map_err(|e| format!("Ingestion failed: {e}"))?;
    drop(migration);
    println!("Database successfully built.");
    Ok(())
}

fn run_refresh(config: &LoaderConfig) -> Result<(), String> {
    let mut migration = open_migration(config)?;
    migration
        .refresh(config, print_progress)
        .map_err(|e| format!("Refresh failed: {e}"))?;
    drop(migration);
    println!("Database successfully rebuilt.");
    Ok(())
}

fn run_status(config: &LoaderConfig) -> Result<(), String> {
    let migration = open_migration(config)?;
    let status = migration
        .status()
        .map_err(|e| format!("Failed to get store status: {e}"))?;
    println!("Store Status ({}):", config.database.display());
    println!(
        "  Table exists: {}",
        if status.table_exists { "yes" } else { "no" }
    );
    println!("  Verse count: {}", status.verse_count);
    for (source, count) in &status.per_source {
        println!("  {source}: {count}");
    }
    Ok(())
}

fn print_progress(progress: &Progress) {
    match progress {
        Progress::Loading { corpus } => println!("Loading {corpus}..."),
        Progress::Loaded(report) => {
            if report.ignored > 0 || report.skipped_empty > 0 {
                println!(
                    "  {} inserted, {} already present, {} empty skipped",
                    report.inserted, report.ignored, report.skipped_empty
                );
            } else {
                println!("  {} inserted", report.inserted);
            }
        }
        Progress::Committed { .. } => {}
    }
}
