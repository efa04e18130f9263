//! Chooser module - anti-match color selection
//!
//! Walks the spawn pool from its cursor and accepts the first candidate that
//! would not complete a run at the target cell. The cursor advances on every
//! probe, accepted or not, so consecutive choices keep drawing fresh colors.
//! At most one full rotation is probed; if nothing is safe the first palette
//! entry is placed anyway.

use tracing::warn;

use crate::grid::Grid;
use crate::matching::would_create_match;
use crate::palette::Palette;
use crate::rng::SpawnPool;
use crate::types::ColorToken;

/// How a color was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A pool candidate that creates no run
    Safe,
    /// Every candidate in the rotation would match; first palette entry used
    Exhausted,
    /// Palette and pool are empty; the neutral token was used
    Degenerate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub token: ColorToken,
    /// Pool candidates examined
    pub probes: usize,
    pub outcome: ChoiceOutcome,
}

/// Pick the next safe color for (row, column)
///
/// The caller is responsible for rebuilding an empty pool first.
pub fn choose_from_pool(
    pool: &mut SpawnPool,
    palette: &Palette,
    grid: &Grid,
    row: usize,
    column: usize,
) -> Choice {
    if pool.is_empty() {
        warn!(row, column, "spawn_palette_empty");
        return Choice {
            token: palette.first().cloned().unwrap_or_else(ColorToken::fallback),
            probes: 0,
            outcome: ChoiceOutcome::Degenerate,
        };
    }

    let pool_len = pool.len();
    for attempt in 0..pool_len {
        let Some(candidate) = pool.next_candidate() else {
            break;
        };
        if !would_create_match(grid, row, column, &candidate.key) {
            return Choice {
                token: candidate.clone(),
                probes: attempt + 1,
                outcome: ChoiceOutcome::Safe,
            };
        }
    }

    let token = palette.first().cloned().unwrap_or_else(ColorToken::fallback);
    warn!(row, column, probes = pool_len, color = %token.key, "spawn_rotation_exhausted");
    Choice {
        token,
        probes: pool_len,
        outcome: ChoiceOutcome::Exhausted,
    }
}
