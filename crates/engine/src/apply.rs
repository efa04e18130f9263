use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::Grid;
use crate::types::{Coord, Move, SpawnInstruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("cell ({row}, {column}) is outside the grid")]
    OutOfBounds { row: usize, column: usize },
    #[error("cell ({row}, {column}) is already occupied")]
    TargetOccupied { row: usize, column: usize },
    #[error("cell ({row}, {column}) has nothing to move")]
    SourceEmpty { row: usize, column: usize },
}

impl ApplyError {
    pub fn code(self) -> &'static str {
        match self {
            ApplyError::OutOfBounds { .. } => "out_of_bounds",
            ApplyError::TargetOccupied { .. } => "target_occupied",
            ApplyError::SourceEmpty { .. } => "source_empty",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApplyError::OutOfBounds { .. } => "instruction addresses a cell outside the grid",
            ApplyError::TargetOccupied { .. } => "instruction targets an occupied cell",
            ApplyError::SourceEmpty { .. } => "move starts from an empty cell",
        }
    }
}

/// Write each spawn's color into its target cell, in order
///
/// Stops at the first invalid instruction; earlier ones stay applied.
pub fn apply_spawns(grid: &mut Grid, instructions: &[SpawnInstruction]) -> Result<usize, ApplyError> {
    for ins in instructions {
        let (row, column) = (ins.target_row, ins.column);
        if !grid.in_bounds(row, column) {
            return Err(ApplyError::OutOfBounds { row, column });
        }
        if !grid.is_empty_at(row, column) {
            return Err(ApplyError::TargetOccupied { row, column });
        }
        grid.set(row, column, Some(ins.spec.color_key.clone()));
    }
    Ok(instructions.len())
}

/// Slide tokens as described by `moves`, in order
pub fn apply_moves(grid: &mut Grid, moves: &[Move]) -> Result<usize, ApplyError> {
    for mv in moves {
        let column = mv.column;
        for row in [mv.from_row, mv.to_row] {
            if !grid.in_bounds(row, column) {
                return Err(ApplyError::OutOfBounds { row, column });
            }
        }
        if !grid.is_empty_at(mv.to_row, column) {
            return Err(ApplyError::TargetOccupied {
                row: mv.to_row,
                column,
            });
        }
        let Some(token) = grid.take(mv.from_row, column) else {
            return Err(ApplyError::SourceEmpty {
                row: mv.from_row,
                column,
            });
        };
        grid.set(mv.to_row, column, Some(token));
    }
    Ok(moves.len())
}

/// Empty the given cells; returns how many held a token
pub fn clear_cells(grid: &mut Grid, cells: &BTreeSet<Coord>) -> usize {
    cells
        .iter()
        .filter(|c| grid.take(c.row, c.column).is_some())
        .count()
}
