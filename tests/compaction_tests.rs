//! Compaction tests - gravity moves in both directions

use blockwars::core::{Grid, GridOrchestrator};
use blockwars::engine::apply_moves;
use blockwars::types::{GridSnapshot, Move};

fn engine(rows: i32, columns: i32, direction: i32) -> GridOrchestrator {
    let mut engine = GridOrchestrator::new();
    engine.set_row_count(rows);
    engine.set_column_count(columns);
    engine.set_fill_direction(direction);
    engine
}

#[test]
fn test_downward_moves_and_result() {
    let engine = engine(4, 2, 1);
    let snap = GridSnapshot::from_keys(&[
        vec!["red", "blue"],
        vec!["", "green"],
        vec!["yellow", ""],
        vec!["", ""],
    ]);
    let moves = engine.compaction_moves(&snap);
    assert_eq!(
        moves,
        vec![
            Move { from_row: 2, to_row: 3, column: 0 },
            Move { from_row: 0, to_row: 2, column: 0 },
            Move { from_row: 1, to_row: 3, column: 1 },
            Move { from_row: 0, to_row: 2, column: 1 },
        ]
    );

    let mut grid = engine.working_copy(&snap);
    apply_moves(&mut grid, &moves).unwrap();
    assert_eq!(grid.column_tokens(0), vec!["red", "yellow"]);
    assert_eq!(grid.column_tokens(1), vec!["blue", "green"]);
    assert!(grid.is_empty_at(0, 0) && grid.is_empty_at(1, 0));
}

#[test]
fn test_upward_moves_toward_row_zero() {
    let engine = engine(3, 1, -1);
    let snap = GridSnapshot::from_keys(&[vec![""], vec![""], vec!["red"]]);
    assert_eq!(
        engine.compaction_moves(&snap),
        vec![Move { from_row: 2, to_row: 0, column: 0 }]
    );
}

#[test]
fn test_compaction_is_idempotent() {
    let engine = engine(5, 3, 1);
    let snap = GridSnapshot::from_keys(&[
        vec!["a", "", "c"],
        vec!["", "b", ""],
        vec!["a", "", ""],
        vec!["", "", "c"],
        vec!["", "b", ""],
    ]);
    let mut grid = engine.working_copy(&snap);
    apply_moves(&mut grid, &engine.compaction_moves(&snap)).unwrap();
    assert!(engine.compaction_moves(&grid.to_snapshot()).is_empty());
}

#[test]
fn test_full_and_empty_columns_produce_no_moves() {
    let engine = engine(2, 2, 1);
    let snap = GridSnapshot::from_keys(&[vec!["a", ""], vec!["b", ""]]);
    assert!(engine.compaction_moves(&snap).is_empty());
}

#[test]
fn test_compaction_ignores_pool_state() {
    let mut engine = engine(3, 3, 1);
    let snap = GridSnapshot::from_keys(&[vec!["a", "b", "c"]]);
    let cursor = engine.pool_cursor();
    let first = engine.compaction_moves(&snap);
    engine.prepare_fill(&GridSnapshot::default());
    assert_eq!(engine.compaction_moves(&snap), first);
    assert_eq!(cursor, 0);
    // Moves only ever target rows inside the grid
    let grid = Grid::new(3, 3);
    assert!(first.iter().all(|m| grid.in_bounds(m.to_row, m.column)));
}
