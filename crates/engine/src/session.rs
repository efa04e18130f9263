//! Session module - a headless host driving the engine
//!
//! Owns an orchestrator and a live grid and plays the host's part: it applies
//! the returned plans to the grid. `settle` runs the usual cascade until the
//! board is full with no runs left:
//!
//! 1. Clear every matched cell
//! 2. Apply compaction moves
//! 3. Apply spawn instructions
//!
//! No scoring and no timing; only counts are reported.

use serde::Serialize;
use tracing::debug;

use crate::apply::{apply_moves, apply_spawns, clear_cells, ApplyError};
use crate::core::{Grid, GridOrchestrator};
use crate::types::GridSnapshot;

/// What one cascade pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub cleared: usize,
    pub moved: usize,
    pub spawned: usize,
}

impl PassReport {
    /// Nothing to clear, move or spawn
    pub fn is_quiet(&self) -> bool {
        self.cleared == 0 && self.moved == 0 && self.spawned == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SettleReport {
    pub passes: usize,
    pub cleared: usize,
    pub moved: usize,
    pub spawned: usize,
    /// Reached a full grid with no runs within the pass limit
    pub stable: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    orchestrator: GridOrchestrator,
    grid: Grid,
}

impl Session {
    /// Start with an empty grid sized to the orchestrator
    pub fn new(orchestrator: GridOrchestrator) -> Self {
        let grid = Grid::new(orchestrator.row_count(), orchestrator.column_count());
        Self { orchestrator, grid }
    }

    /// Start from an existing snapshot (reshaped to the orchestrator)
    pub fn with_snapshot(orchestrator: GridOrchestrator, snapshot: &GridSnapshot) -> Self {
        let grid = orchestrator.working_copy(snapshot);
        Self { orchestrator, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.to_snapshot()
    }

    pub fn orchestrator(&self) -> &GridOrchestrator {
        &self.orchestrator
    }

    /// Reconfiguration takes effect at the next pass
    pub fn orchestrator_mut(&mut self) -> &mut GridOrchestrator {
        &mut self.orchestrator
    }

    /// Run one clear, compact, fill pass
    pub fn step(&mut self) -> Result<PassReport, ApplyError> {
        // Follow any dimension change made through orchestrator_mut
        if self.grid.rows() != self.orchestrator.row_count()
            || self.grid.columns() != self.orchestrator.column_count()
        {
            self.grid = self.orchestrator.working_copy(&self.grid.to_snapshot());
        }

        let matches = self.orchestrator.detect_matches(&self.snapshot());
        let cleared = clear_cells(&mut self.grid, &matches);

        let moves = self.orchestrator.compaction_moves(&self.snapshot());
        let moved = apply_moves(&mut self.grid, &moves)?;

        let spawns = self.orchestrator.prepare_fill(&self.snapshot());
        let spawned = apply_spawns(&mut self.grid, &spawns)?;

        let report = PassReport {
            cleared,
            moved,
            spawned,
        };
        debug!(cleared, moved, spawned, "cascade_pass");
        Ok(report)
    }

    /// Repeat passes until one is quiet or `max_passes` have run
    pub fn settle(&mut self, max_passes: usize) -> Result<SettleReport, ApplyError> {
        let mut report = SettleReport::default();
        while report.passes < max_passes {
            let pass = self.step()?;
            report.passes += 1;
            report.cleared += pass.cleared;
            report.moved += pass.moved;
            report.spawned += pass.spawned;
            if pass.is_quiet() {
                report.stable = true;
                break;
            }
        }
        debug!(
            passes = report.passes,
            cleared = report.cleared,
            spawned = report.spawned,
            stable = report.stable,
            "settle_finished"
        );
        Ok(report)
    }
}
