//! CLI entrypoint for name-picker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use picker_application::{
    AutoConfirm, ConfirmationPort, EventLogger, KeyValueStore, NoEventLogger, PickerCommand,
    PickerController,
};
use picker_domain::DrawSchedule;
use picker_infrastructure::{
    ConfigLoader, JsonFileStore, JsonlEventLogger, MemoryStore, SystemRandomSource,
    TokioScheduler,
};
use picker_presentation::{
    Cli, OutputConfig, PickerRepl, ReplConfig, ReplPresenter, TerminalConfirmation,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle --show-config
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file_path().as_deref())?;

    info!("Starting name-picker");

    // CLI flags override config file settings
    let mut picker_config = config.to_picker_config();
    if let Some(persist) = cli.persist_override() {
        picker_config.persist = persist;
    }
    if cli.allow_duplicates {
        picker_config.options.allow_duplicates = true;
    }
    if cli.remove_after_pick {
        picker_config.options.remove_after_pick = true;
    }
    if cli.no_animation {
        picker_config.schedule = DrawSchedule::instant();
    }

    // === Dependency Injection ===
    let store_path = cli
        .store
        .clone()
        .or_else(|| config.storage.resolved_path())
        .or_else(JsonFileStore::default_path);
    let store = open_store(store_path);

    let confirmation: Arc<dyn ConfirmationPort> = if cli.yes {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(TerminalConfirmation::new())
    };

    let event_logger: Arc<dyn EventLogger> = match cli
        .event_log
        .clone()
        .or_else(|| config.logging.event_log_path())
        .and_then(JsonlEventLogger::new)
    {
        Some(logger) => {
            info!("Event log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoEventLogger),
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let controller = PickerController::new(
        picker_config,
        store,
        Arc::new(SystemRandomSource::new()),
        Arc::new(TokioScheduler),
        tx,
    )
    .with_confirmation(confirmation)
    .with_event_logger(event_logger);

    let presenter = ReplPresenter::from_config(&OutputConfig {
        color: config.output.color,
        animate: !cli.no_animation,
        quiet: cli.quiet,
    });
    let mut repl = PickerRepl::new(controller, rx, presenter).with_config(ReplConfig {
        history_file: config.repl.history_path(),
    });

    if let Some(batch) = cli.batch {
        repl.execute(PickerCommand::AddBatch(batch)).await;
    }

    // One-shot mode
    if cli.draw {
        repl.execute(PickerCommand::Draw).await;
        if repl.controller().last_winner().is_none() {
            bail!("No winner was drawn");
        }
        return Ok(());
    }

    repl.run().await?;
    Ok(())
}

/// Install the tracing subscriber, writing to `log_file` when configured
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Open the JSON store, falling back to memory so the session still works
fn open_store(path: Option<PathBuf>) -> Arc<dyn KeyValueStore> {
    let Some(path) = path else {
        warn!("No data directory found; names will not be saved");
        return Arc::new(MemoryStore::new());
    };

    match JsonFileStore::open(&path) {
        Ok(store) => {
            info!("Using store {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            warn!("Could not open store {}: {}; names will not be saved", path.display(), e);
            Arc::new(MemoryStore::new())
        }
    }
}
