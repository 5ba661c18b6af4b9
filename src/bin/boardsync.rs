//! Runs the boardsync pipelines over a board snapshot.
//!
//! Usage:
//!
//! ```text
//! boardsync [--config board.yaml] [--log-format text|json] labels --snapshot cards.json [--write]
//! boardsync [--config board.yaml] [--log-format text|json] stages --snapshot cards.json
//! ```
//!
//! `labels` resolves checklist references against the snapshot itself and
//! prints the labeling report; with `--write` (or `write-labels: true`) the
//! label changes are applied to the in-memory board and listed alongside the
//! report. `stages` prints per-stage counts for the `report-on-labels`
//! filter chain. Results go to stdout as JSON; logs go to stderr.

use boardsync::board::adapters::{
    BoardSnapshot, InMemoryBoardClient, LabelMutation, SnapshotError,
};
use boardsync::board::ports::BoardClientError;
use boardsync::config::{BoardConfig, ConfigError};
use boardsync::labeling::services::{LabelingReport, ReferenceLabelingService};
use boardsync::stages::adapters::ColumnStageClassifier;
use boardsync::stages::services::StageCountService;
use boardsync::telemetry::{self, LogFormat, TelemetryError};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

/// Errors that end a boardsync run.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("board client failed: {0}")]
    Board(#[from] BoardClientError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "boardsync",
    version,
    about = "Label propagation and stage counts for project boards"
)]
struct Cli {
    /// Configuration file (YAML or JSON). Defaults apply when omitted.
    #[arg(long, global = true, env = "BOARDSYNC_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Log output format: text or json.
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Propagate role labels onto checklist-referenced cards.
    Labels {
        /// Board snapshot (JSON).
        #[arg(long)]
        snapshot: Utf8PathBuf,

        /// Apply label changes instead of previewing them.
        #[arg(long)]
        write: bool,
    },
    /// Count cards per stage against WIP limits.
    Stages {
        /// Board snapshot (JSON).
        #[arg(long)]
        snapshot: Utf8PathBuf,
    },
}

#[derive(Serialize)]
struct LabelsOutput {
    report: LabelingReport,
    mutations: Vec<LabelMutation>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format)?;

    let config = cli
        .config
        .as_deref()
        .map_or_else(|| Ok(BoardConfig::default()), BoardConfig::load)?;

    match cli.command {
        Command::Labels { snapshot, write } => {
            let write_labels = config.write_labels() || write;
            run_labels(config.with_write_labels(write_labels), &snapshot)
        }
        Command::Stages { snapshot } => run_stages(&config, &snapshot),
    }
}

fn run_labels(config: BoardConfig, snapshot_path: &Utf8Path) -> Result<(), CliError> {
    let snapshot = BoardSnapshot::load(snapshot_path)?;
    info!(path = %snapshot_path, count = snapshot.cards.len(), "loaded snapshot");

    let client = Arc::new(InMemoryBoardClient::with_cards(snapshot.cards.clone()));
    let service = ReferenceLabelingService::new(Arc::clone(&client), config);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    let report = runtime.block_on(service.process(&snapshot.cards));

    let output = LabelsOutput {
        report,
        mutations: client.mutations()?,
    };
    write_json(&output)
}

fn run_stages(config: &BoardConfig, snapshot_path: &Utf8Path) -> Result<(), CliError> {
    let snapshot = BoardSnapshot::load(snapshot_path)?;
    info!(path = %snapshot_path, count = snapshot.cards.len(), "loaded snapshot");

    let service = StageCountService::new(
        ColumnStageClassifier::new(config.stage_columns()),
        config.filter_chain(),
        config.stage_limits().clone(),
    );
    write_json(&service.count(&snapshot.cards))
}

fn write_json(value: &impl Serialize) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out).map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)
}
