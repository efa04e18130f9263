//! Grid module - the engine's private working copy of a snapshot
//!
//! Every query reshapes the caller's snapshot to the configured dimensions:
//! rows and columns beyond them are dropped, missing ones are empty.
//! Uses a flat row-major vector like a fixed board, sized at construction.

use crate::types::{Coord, GridSnapshot};

/// A `rows x columns` matrix of optional color keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Flat vector of cells, row-major order (row * columns + column)
    cells: Vec<Option<String>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Clip/pad a snapshot to `rows x columns`
    pub fn reshape(snapshot: &GridSnapshot, rows: usize, columns: usize) -> Self {
        let mut grid = Self::new(rows, columns);
        for (row, cells) in snapshot.rows.iter().take(rows).enumerate() {
            for column in 0..cells.len().min(columns) {
                if let Some(key) = snapshot.cell(row, column) {
                    grid.cells[row * columns + column] = Some(key.to_string());
                }
            }
        }
        grid
    }

    /// Build from plain keys (`""` = empty), sized to the input's bounding box
    pub fn from_keys<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self::reshape(&GridSnapshot::from_keys(rows), rows.len(), columns)
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Key at (row, column); None when empty or out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.index(row, column)
            .and_then(|idx| self.cells[idx].as_deref())
    }

    /// Set a cell; returns false if out of bounds
    pub fn set(&mut self, row: usize, column: usize, key: Option<String>) -> bool {
        match self.index(row, column) {
            Some(idx) => {
                self.cells[idx] = key.filter(|k| !k.is_empty());
                true
            }
            None => false,
        }
    }

    /// Take the token out of a cell, leaving it empty
    pub fn take(&mut self, row: usize, column: usize) -> Option<String> {
        self.index(row, column)
            .and_then(|idx| self.cells[idx].take())
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        matches!(self.index(row, column), Some(idx) if self.cells[idx].is_none())
    }

    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        self.index(row, column).is_some()
    }

    /// Count of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Tokens of one column from row 0 down, empties skipped
    pub fn column_tokens(&self, column: usize) -> Vec<&str> {
        (0..self.rows)
            .filter_map(|row| self.get(row, column))
            .collect()
    }

    /// Coordinates of every filled cell, row-major
    pub fn filled(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|_| Coord::new(idx / self.columns, idx % self.columns))
        })
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Convert back to the boundary representation
    pub fn to_snapshot(&self) -> GridSnapshot {
        let rows = (0..self.rows)
            .map(|row| {
                let start = row * self.columns;
                self.cells[start..start + self.columns].to_vec()
            })
            .collect();
        GridSnapshot::new(rows)
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        grid.to_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(2, 3), Some(11));
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_reshape_clips_and_pads() {
        let snap = GridSnapshot::from_keys(&[
            vec!["red", "blue", "green", "yellow"],
            vec!["blue"],
            vec!["green", "green", "green"],
        ]);
        let grid = Grid::reshape(&snap, 2, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(0, 2), Some("green"));
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(1, 0), Some("blue"));
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.empty_count(), 2);
    }

    #[test]
    fn test_set_rejects_out_of_bounds_and_normalizes_empty() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(1, 1, Some("red".to_string())));
        assert!(!grid.set(2, 0, Some("red".to_string())));
        assert!(grid.set(1, 1, Some(String::new())));
        assert!(grid.is_empty_at(1, 1));
        assert!(!grid.is_empty_at(5, 5));
    }

    #[test]
    fn test_snapshot_roundtrip_keeps_shape() {
        let grid = Grid::from_keys(&[vec!["red", ""], vec!["", "blue"]]);
        let snap = grid.to_snapshot();
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.rows[0], vec![Some("red".to_string()), None]);
        assert_eq!(Grid::reshape(&snap, 2, 2), grid);
    }

    #[test]
    fn test_column_tokens_and_filled() {
        let grid = Grid::from_keys(&[vec!["a", ""], vec!["", "b"], vec!["c", ""]]);
        assert_eq!(grid.column_tokens(0), vec!["a", "c"]);
        let filled: Vec<Coord> = grid.filled().collect();
        assert_eq!(
            filled,
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }
}
