//! Headless grid engine runner (default binary).
//!
//! Reads an optional engine config and grid snapshot, runs one engine query
//! and prints the result as JSON on stdout. Logs go to stderr (`RUST_LOG`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockwars::core::{EngineConfig, GridOrchestrator};
use blockwars::engine::Session;
use blockwars::types::GridSnapshot;

#[derive(Parser, Debug)]
#[command(name = "blockwars", about = "Plan fills, gravity and matches for a match-3 grid")]
struct Args {
    /// Engine config (JSON). BLOCKWARS_* environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spawn instructions for every empty cell
    Fill {
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Gravity moves
    Compact {
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Cells in runs of three or more
    Matches {
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Color spec for one cell
    Spawn {
        #[arg(long)]
        grid: Option<PathBuf>,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        column: usize,
    },
    /// Print the spawn pool
    Pool {
        /// Only print the first N entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Clear, compact and refill until stable
    Settle {
        #[arg(long)]
        grid: Option<PathBuf>,
        #[arg(long, default_value_t = 32)]
        max_passes: usize,
    },
}

#[derive(Serialize)]
struct PoolOutput<'a> {
    seed: u32,
    size: usize,
    cursor: usize,
    colors: Vec<&'a str>,
}

#[derive(Serialize)]
struct SettleOutput {
    report: blockwars::engine::SettleReport,
    grid: GridSnapshot,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    }
    .with_env_overrides();
    config.validate().context("invalid configuration")?;

    let mut engine = GridOrchestrator::from_config(&config);
    info!(
        rows = engine.row_count(),
        columns = engine.column_count(),
        seed = engine.spawn_seed(),
        direction = engine.fill_direction().as_str(),
        "engine_configured"
    );

    let json = match args.command {
        Command::Fill { grid } => {
            let snapshot = read_grid(grid.as_deref())?;
            serde_json::to_string_pretty(&engine.prepare_fill(&snapshot))?
        }
        Command::Compact { grid } => {
            let snapshot = read_grid(grid.as_deref())?;
            serde_json::to_string_pretty(&engine.compaction_moves(&snapshot))?
        }
        Command::Matches { grid } => {
            let snapshot = read_grid(grid.as_deref())?;
            serde_json::to_string_pretty(&engine.detect_matches(&snapshot))?
        }
        Command::Spawn { grid, row, column } => {
            let snapshot = read_grid(grid.as_deref())?;
            serde_json::to_string_pretty(&engine.spawn_spec_for(&snapshot, row, column))?
        }
        Command::Pool { limit } => {
            let pool = engine.pool();
            let take = limit.unwrap_or(pool.len());
            let out = PoolOutput {
                seed: engine.spawn_seed(),
                size: pool.len(),
                cursor: pool.cursor(),
                colors: pool.as_slice().iter().take(take).map(|t| t.key.as_str()).collect(),
            };
            serde_json::to_string_pretty(&out)?
        }
        Command::Settle { grid, max_passes } => {
            let snapshot = read_grid(grid.as_deref())?;
            let mut session = Session::with_snapshot(engine, &snapshot);
            let report = session.settle(max_passes)?;
            serde_json::to_string_pretty(&SettleOutput {
                report,
                grid: session.snapshot(),
            })?
        }
    };

    println!("{json}");
    Ok(())
}

/// Read a grid snapshot; no path means an all-empty grid
fn read_grid(path: Option<&Path>) -> Result<GridSnapshot> {
    let Some(path) = path else {
        return Ok(GridSnapshot::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading grid {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing grid {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
