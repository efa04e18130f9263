//! Matching module - run detection on a grid
//!
//! A match is a horizontal or vertical run of at least [`MIN_MATCH_RUN`]
//! identical, non-empty keys. Two entry points share the same rule:
//!
//! - [`detect_matches`] scans the whole grid and returns every matched cell
//! - [`runs_through`] / [`would_create_match`] answer the single-cell question
//!   "if this key were placed here, which runs would it complete?"

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Coord, MIN_MATCH_RUN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A run that placing a key would complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub axis: Axis,
    /// Total run length including the placed cell
    pub length: usize,
}

/// Every cell that belongs to a run of length >= 3
///
/// Cells covered by both a horizontal and a vertical run appear once.
pub fn detect_matches(grid: &Grid) -> BTreeSet<Coord> {
    let mut seen = BTreeSet::new();
    let rows = grid.rows();
    let columns = grid.columns();
    if rows == 0 || columns == 0 {
        return seen;
    }

    // Horizontal runs
    for row in 0..rows {
        let mut column = 0;
        while column < columns {
            let Some(key) = grid.get(row, column) else {
                column += 1;
                continue;
            };
            let mut end = column + 1;
            while end < columns && grid.get(row, end) == Some(key) {
                end += 1;
            }
            if end - column >= MIN_MATCH_RUN {
                seen.extend((column..end).map(|c| Coord::new(row, c)));
            }
            column = end;
        }
    }

    // Vertical runs
    for column in 0..columns {
        let mut row = 0;
        while row < rows {
            let Some(key) = grid.get(row, column) else {
                row += 1;
                continue;
            };
            let mut end = row + 1;
            while end < rows && grid.get(end, column) == Some(key) {
                end += 1;
            }
            if end - row >= MIN_MATCH_RUN {
                seen.extend((row..end).map(|r| Coord::new(r, column)));
            }
            row = end;
        }
    }

    seen
}

/// Count contiguous `key` cells walking from (row, column) by (dr, dc), exclusive
fn count_direction(grid: &Grid, row: usize, column: usize, dr: isize, dc: isize, key: &str) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = column as isize + dc;
    while r >= 0 && c >= 0 && grid.get(r as usize, c as usize) == Some(key) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Runs of length >= 3 that placing `key` at (row, column) would complete
///
/// The cell's own current content is ignored. An empty key never matches,
/// and neither does a cell outside the grid.
pub fn runs_through(grid: &Grid, row: usize, column: usize, key: &str) -> ArrayVec<Run, 2> {
    let mut runs = ArrayVec::new();
    if key.is_empty() || !grid.in_bounds(row, column) {
        return runs;
    }

    let horizontal = 1
        + count_direction(grid, row, column, 0, -1, key)
        + count_direction(grid, row, column, 0, 1, key);
    if horizontal >= MIN_MATCH_RUN {
        runs.push(Run {
            axis: Axis::Horizontal,
            length: horizontal,
        });
    }

    let vertical = 1
        + count_direction(grid, row, column, -1, 0, key)
        + count_direction(grid, row, column, 1, 0, key);
    if vertical >= MIN_MATCH_RUN {
        runs.push(Run {
            axis: Axis::Vertical,
            length: vertical,
        });
    }

    runs
}

/// Whether placing `key` at (row, column) creates a run of length >= 3
pub fn would_create_match(grid: &Grid, row: usize, column: usize, key: &str) -> bool {
    !runs_through(grid, row, column, key).is_empty()
}
