//! Compaction module - gravity moves
//!
//! Each column is compacted independently with a two-pointer scan: a write
//! cursor starts at the gravity edge, every token found scanning inward is
//! slid to the cursor, and the cursor steps inward. Tokens keep their relative
//! order. Rows past the final cursor end empty; no move is emitted for them.

use crate::grid::Grid;
use crate::types::{FillDirection, Move};

/// Plan moves that leave no gaps between tokens and the gravity edge
///
/// `grid` is compacted in place so it reflects the moves applied in order.
pub fn plan_compaction(grid: &mut Grid, direction: FillDirection) -> Vec<Move> {
    let rows = grid.rows();
    let columns = grid.columns();
    let mut moves = Vec::new();
    if rows == 0 || columns == 0 {
        return moves;
    }

    for column in 0..columns {
        // Index along the gravity axis: 0 is the gravity edge
        let row_at = |step: usize| match direction {
            FillDirection::Downward => rows - 1 - step,
            FillDirection::Upward => step,
        };

        let mut write = 0;
        for read in 0..rows {
            let from = row_at(read);
            let Some(token) = grid.take(from, column) else {
                continue;
            };
            let to = row_at(write);
            if from != to {
                moves.push(Move {
                    from_row: from,
                    to_row: to,
                    column,
                });
            }
            grid.set(to, column, Some(token));
            write += 1;
        }
    }

    moves
}
