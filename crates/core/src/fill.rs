//! Fill module - spawn planning for empty cells
//!
//! Scan order is part of the contract. Columns go left to right; within a
//! column the scan starts at the gravity edge so the cell a piece lands on
//! first is planned first:
//!
//! - **Downward**: rows bottom to top, pieces enter at row `-1`
//! - **Upward**: rows top to bottom, pieces enter at row `rows`
//!
//! Each chosen color is written into the working grid before the next cell is
//! planned, so later choices see earlier ones as neighbours.

use crate::grid::Grid;
use crate::types::{ColorToken, FillDirection, SpawnInstruction};

/// Plan spawns for every empty cell of `grid`, filling it in place
///
/// `choose` is asked for a color for each empty (row, column) in scan order.
pub fn plan_fill<F>(grid: &mut Grid, direction: FillDirection, mut choose: F) -> Vec<SpawnInstruction>
where
    F: FnMut(&Grid, usize, usize) -> ColorToken,
{
    let rows = grid.rows();
    let columns = grid.columns();
    let mut instructions = Vec::with_capacity(grid.empty_count());
    if rows == 0 || columns == 0 {
        return instructions;
    }

    let spawn_row = direction.spawn_row(rows);
    for column in 0..columns {
        for step in 0..rows {
            let row = match direction {
                FillDirection::Downward => rows - 1 - step,
                FillDirection::Upward => step,
            };
            if !grid.is_empty_at(row, column) {
                continue;
            }

            let token = choose(grid, row, column);
            grid.set(row, column, Some(token.key.clone()));
            instructions.push(SpawnInstruction {
                column,
                target_row: row,
                spawn_row,
                spec: token.to_spec(),
            });
        }
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(key: &'static str) -> impl FnMut(&Grid, usize, usize) -> ColorToken {
        move |_, _, _| ColorToken::new(key, "#fff")
    }

    #[test]
    fn test_downward_scans_bottom_up_per_column() {
        let mut grid = Grid::new(2, 2);
        let plan = plan_fill(&mut grid, FillDirection::Downward, constant("x"));
        let order: Vec<(usize, usize)> = plan.iter().map(|i| (i.column, i.target_row)).collect();
        assert_eq!(order, vec![(0, 1), (0, 0), (1, 1), (1, 0)]);
        assert!(plan.iter().all(|i| i.spawn_row == -1));
        assert!(grid.is_full());
    }

    #[test]
    fn test_upward_scans_top_down_per_column() {
        let mut grid = Grid::new(3, 1);
        let plan = plan_fill(&mut grid, FillDirection::Upward, constant("x"));
        let rows: Vec<usize> = plan.iter().map(|i| i.target_row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        assert!(plan.iter().all(|i| i.spawn_row == 3));
    }

    #[test]
    fn test_filled_cells_are_skipped() {
        let mut grid = Grid::from_keys(&[vec!["a", ""], vec!["", "b"]]);
        let plan = plan_fill(&mut grid, FillDirection::Downward, constant("x"));
        assert_eq!(plan.len(), 2);
        assert_eq!((plan[0].column, plan[0].target_row), (0, 1));
        assert_eq!((plan[1].column, plan[1].target_row), (1, 0));
    }

    #[test]
    fn test_chooser_sees_earlier_placements() {
        let mut grid = Grid::new(3, 1);
        let mut seen_filled = Vec::new();
        plan_fill(&mut grid, FillDirection::Downward, |g, _, _| {
            seen_filled.push(g.filled().count());
            ColorToken::new("x", "#fff")
        });
        assert_eq!(seen_filled, vec![0, 1, 2]);
    }
}
