//! CLI entrypoint for Dinner Planner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use planner_application::{
    ActionJournal, ComputeBoundary, GenerateProgress, KeyValueStore, NoActionJournal,
    NoProgress, PlannerSession,
};
use planner_infrastructure::{
    ConfigLoader, FileConfig, FileKeyValueStore, JsonlActionJournal, MemoryKeyValueStore,
    ProcessSolverLoader, Severity,
};
use planner_presentation::{
    Cli, Command, FormRepl, FormView, OutputConfig, OutputFormatter, ProgressReporter, ReplConfig,
    formatter_for,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialize logging based on verbosity level, optionally mirrored to a
/// daily log file. The returned guard must outlive the program.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("dinner-planner")
                .filename_suffix("log")
                .build(dir)
                .with_context(|| format!("Failed to open log directory {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

fn open_store(config: &FileConfig) -> Arc<dyn KeyValueStore> {
    if config.storage.ephemeral {
        info!("Ephemeral run; nothing is written to disk");
        return Arc::new(MemoryKeyValueStore::new());
    }
    match config.storage.resolved_dir() {
        Some(dir) => {
            info!("Storing form in {}", dir.display());
            Arc::new(FileKeyValueStore::new(dir))
        }
        None => Arc::new(MemoryKeyValueStore::new()),
    }
}

fn open_journal(config: &FileConfig) -> Arc<dyn ActionJournal> {
    config
        .logging
        .journal
        .then(|| config.logging.journal_path())
        .flatten()
        .and_then(|path| {
            JsonlActionJournal::open(&path)
                .inspect_err(|e| warn!("Could not open journal {}: {}", path.display(), e))
                .ok()
        })
        .map(|journal| {
            info!("Journaling actions to {}", journal.path().display());
            Arc::new(journal) as Arc<dyn ActionJournal>
        })
        .unwrap_or_else(|| Arc::new(NoActionJournal))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut config = load_config(&cli)?;
    if cli.ephemeral {
        config.storage.ephemeral = true;
    }
    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref())?;

    info!("Starting Dinner Planner");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}: {}", issue.field, issue.message),
            Severity::Error => error!("{}: {}", issue.field, issue.message),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration");
    }

    let output_config = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    output_config.apply_color();
    let formatter = formatter_for(output_config.format);

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone().map(PathBuf::from),
    };

    // === Dependency Injection ===
    let store = open_store(&config);
    let compute = ComputeBoundary::start(Arc::new(ProcessSolverLoader::new(
        config.solver.command.clone(),
        config.solver.args.clone(),
        config.solver.timeout(),
    )));
    let mut session = PlannerSession::open(store, compute).with_journal(open_journal(&config));

    match cli.selected_command() {
        Command::Edit => {
            FormRepl::new(session, formatter)
                .with_progress(repl_config.show_progress)
                .with_history(repl_config.history_path())
                .run()
                .await?;
        }
        Command::Show => {
            let status = session.compute().settled().await;
            println!(
                "{}",
                FormView::render(session.roster(), session.selectors(), &status)
            );
        }
        Command::Generate => {
            let status = session.compute().settled().await;
            info!("Solver {}", status);

            let progress: Box<dyn GenerateProgress> = if cli.quiet {
                Box::new(NoProgress)
            } else {
                Box::new(ProgressReporter::new())
            };
            let output = session.generate(progress.as_ref()).await?;
            println!("{}", formatter.format(output));
        }
        Command::Output => match session.output() {
            Some(output) => println!("{}", formatter.format(output)),
            None => eprintln!("No output yet. Run 'dinner-planner generate' first."),
        },
        Command::Reset => {
            session.reset()?;
            println!("Form and output cleared.");
        }
    }

    Ok(())
}
