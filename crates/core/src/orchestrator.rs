//! Orchestrator module - configuration, pool state and the host-facing queries
//!
//! [`GridOrchestrator`] is the only stateful piece of the engine. It owns the
//! configuration (dimensions, direction, seed, palette), the spawn pool
//! derived from it, and the pool cursor. Every query takes a caller-owned
//! [`GridSnapshot`], reshapes a private copy to the configured dimensions and
//! returns instructions; nothing the caller passed in is mutated.
//!
//! The cursor is the only state that survives between queries. Rebuilding the
//! pool is its only reset path. Callers sharing an orchestrator across threads
//! must serialize access themselves; every query that draws colors takes
//! `&mut self`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::chooser::{choose_from_pool, ChoiceOutcome};
use crate::compaction::plan_compaction;
use crate::config::EngineConfig;
use crate::fill::plan_fill;
use crate::grid::Grid;
use crate::matching::{detect_matches, would_create_match};
use crate::palette::Palette;
use crate::rng::SpawnPool;
use crate::types::{
    ColorSpec, ColorToken, ConfigChange, Coord, FillDirection, GridSnapshot, Move,
    SpawnInstruction, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED,
};

/// Instrumentation counters; never affect results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnStats {
    /// Colors handed out
    pub choices: u64,
    /// Pool candidates examined
    pub probes: u64,
    /// Full rotations exhausted (first palette entry placed)
    pub fallbacks: u64,
    /// Choices made with an empty palette
    pub degenerate: u64,
    /// Pool rebuilds, including the one at construction
    pub rebuilds: u64,
}

#[derive(Debug, Clone)]
pub struct GridOrchestrator {
    palette: Palette,
    pool: SpawnPool,
    rows: usize,
    columns: usize,
    fill_direction: FillDirection,
    seed: u32,
    stats: SpawnStats,
}

impl GridOrchestrator {
    /// Orchestrator with the default 6x6 grid, seed 1 and stock palette
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        let mut orchestrator = Self {
            palette,
            pool: SpawnPool::default(),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            fill_direction: FillDirection::Downward,
            seed: DEFAULT_SEED,
            stats: SpawnStats::default(),
        };
        orchestrator.rebuild_pool();
        orchestrator
    }

    /// Build from a validated configuration
    ///
    /// Zero dimensions in `config` are ignored, like the setters.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut orchestrator = Self {
            palette: config.palette(),
            pool: SpawnPool::default(),
            rows: if config.rows > 0 { config.rows } else { DEFAULT_ROWS },
            columns: if config.columns > 0 {
                config.columns
            } else {
                DEFAULT_COLUMNS
            },
            fill_direction: config.fill_direction,
            seed: config.seed.max(1),
            stats: SpawnStats::default(),
        };
        orchestrator.rebuild_pool();
        orchestrator
    }

    // ============== Configuration ==============

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Set the row count; non-positive values are ignored
    pub fn set_row_count(&mut self, value: i32) -> Option<ConfigChange> {
        if value <= 0 || self.rows == value as usize {
            return None;
        }
        self.rows = value as usize;
        self.rebuild_pool();
        Some(ConfigChange::RowCount)
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Set the column count; non-positive values are ignored
    pub fn set_column_count(&mut self, value: i32) -> Option<ConfigChange> {
        if value <= 0 || self.columns == value as usize {
            return None;
        }
        self.columns = value as usize;
        self.rebuild_pool();
        Some(ConfigChange::ColumnCount)
    }

    pub fn fill_direction(&self) -> FillDirection {
        self.fill_direction
    }

    /// Set the direction from any integer (sign decides)
    pub fn set_fill_direction(&mut self, value: i32) -> Option<ConfigChange> {
        self.set_direction(FillDirection::from_i32(value))
    }

    pub fn set_direction(&mut self, direction: FillDirection) -> Option<ConfigChange> {
        if self.fill_direction == direction {
            return None;
        }
        self.fill_direction = direction;
        Some(ConfigChange::FillDirection)
    }

    pub fn spawn_seed(&self) -> u32 {
        self.seed
    }

    /// Set the seed; 0 is coerced to 1
    pub fn set_spawn_seed(&mut self, value: u32) -> Option<ConfigChange> {
        let value = value.max(1);
        if self.seed == value {
            return None;
        }
        self.seed = value;
        self.rebuild_pool();
        Some(ConfigChange::SpawnSeed)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) -> Option<ConfigChange> {
        if self.palette == palette {
            return None;
        }
        self.palette = palette;
        self.rebuild_pool();
        Some(ConfigChange::Palette)
    }

    // ============== Pool ==============

    pub fn pool(&self) -> &SpawnPool {
        &self.pool
    }

    pub fn pool_cursor(&self) -> usize {
        self.pool.cursor()
    }

    pub fn stats(&self) -> SpawnStats {
        self.stats
    }

    /// Force a rebuild without a configuration change (cursor back to 0)
    pub fn reset_pool(&mut self) {
        self.rebuild_pool();
    }

    fn rebuild_pool(&mut self) {
        self.pool = SpawnPool::build(self.seed, self.rows, self.columns, &self.palette);
        self.stats.rebuilds += 1;
        debug!(
            seed = self.seed,
            rows = self.rows,
            columns = self.columns,
            palette = self.palette.len(),
            pool = self.pool.len(),
            "spawn_pool_rebuilt"
        );
    }

    /// Pick a color for (row, column) of a working grid, advancing the cursor
    pub fn choose_from_pool(&mut self, grid: &Grid, row: usize, column: usize) -> ColorToken {
        if self.pool.is_empty() {
            self.rebuild_pool();
        }

        let choice = choose_from_pool(&mut self.pool, &self.palette, grid, row, column);
        self.stats.choices += 1;
        self.stats.probes += choice.probes as u64;
        match choice.outcome {
            ChoiceOutcome::Safe => {}
            ChoiceOutcome::Exhausted => self.stats.fallbacks += 1,
            ChoiceOutcome::Degenerate => self.stats.degenerate += 1,
        }
        choice.token
    }

    // ============== Queries ==============

    /// Reshape a snapshot to the configured dimensions
    pub fn working_copy(&self, snapshot: &GridSnapshot) -> Grid {
        Grid::reshape(snapshot, self.rows, self.columns)
    }

    /// Spawn instructions for every empty cell, in drop order
    pub fn prepare_fill(&mut self, snapshot: &GridSnapshot) -> Vec<SpawnInstruction> {
        let mut grid = self.working_copy(snapshot);
        let direction = self.fill_direction;
        let instructions = plan_fill(&mut grid, direction, |g, row, column| {
            self.choose_from_pool(g, row, column)
        });
        debug!(
            spawns = instructions.len(),
            cursor = self.pool.cursor(),
            "fill_planned"
        );
        instructions
    }

    /// Moves that slide every token to the gravity edge
    pub fn compaction_moves(&self, snapshot: &GridSnapshot) -> Vec<Move> {
        let mut grid = self.working_copy(snapshot);
        let moves = plan_compaction(&mut grid, self.fill_direction);
        debug!(moves = moves.len(), "compaction_planned");
        moves
    }

    /// Cells in runs of three or more
    pub fn detect_matches(&self, snapshot: &GridSnapshot) -> BTreeSet<Coord> {
        detect_matches(&self.working_copy(snapshot))
    }

    /// One-off color choice for a single cell, outside a fill pass
    pub fn spawn_spec_for(&mut self, snapshot: &GridSnapshot, row: usize, column: usize) -> ColorSpec {
        let grid = self.working_copy(snapshot);
        self.choose_from_pool(&grid, row, column).to_spec()
    }

    /// Whether placing `key` at (row, column) would complete a run
    pub fn would_create_match(&self, snapshot: &GridSnapshot, row: usize, column: usize, key: &str) -> bool {
        would_create_match(&self.working_copy(snapshot), row, column, key)
    }
}

impl Default for GridOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
