//! RNG module - deterministic spawn pool generation
//!
//! The spawn pool is a fixed-length color sequence derived from the seed, the
//! grid dimensions and the palette. It is generated up front so the same
//! configuration always replays the same game, and a cursor walks it as
//! colors are consumed.

use crate::palette::Palette;
use crate::types::{ColorToken, LCG_INCREMENT, LCG_MULTIPLIER, POOL_CELL_MULTIPLIER};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Map the next state onto `[0, len)` as `floor(state / 2^32 * len)`
    ///
    /// Returns 0 when `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let state = self.next_u32() as u64;
        let scaled = (state * len as u64) >> 32;
        (scaled as usize) % len
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Pool length for a configuration: `max(rows * columns * 4, palette size)`
pub fn pool_size(rows: usize, columns: usize, palette_len: usize) -> usize {
    rows.saturating_mul(columns)
        .saturating_mul(POOL_CELL_MULTIPLIER)
        .max(palette_len)
}

/// Pre-generated spawn colors plus the read cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnPool {
    tokens: Vec<ColorToken>,
    cursor: usize,
}

impl SpawnPool {
    /// Generate the pool for one (seed, rows, columns, palette) tuple
    ///
    /// An empty palette yields an empty pool.
    pub fn build(seed: u32, rows: usize, columns: usize, palette: &Palette) -> Self {
        if palette.is_empty() {
            return Self::default();
        }

        let total = pool_size(rows, columns, palette.len());
        let mut rng = SimpleRng::new(seed);
        let mut tokens = Vec::with_capacity(total);
        for _ in 0..total {
            let index = rng.next_index(palette.len());
            if let Some(token) = palette.get(index) {
                tokens.push(token.clone());
            }
        }

        Self { tokens, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the next candidate, always in `[0, len)` for a non-empty pool
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the candidate under the cursor and advance the cursor
    pub fn next_candidate(&mut self) -> Option<&ColorToken> {
        if self.tokens.is_empty() {
            return None;
        }
        let index = self.cursor % self.tokens.len();
        self.cursor = (index + 1) % self.tokens.len();
        self.tokens.get(index)
    }

    /// Peek at the candidate under the cursor without consuming it
    pub fn peek(&self) -> Option<&ColorToken> {
        if self.tokens.is_empty() {
            return None;
        }
        self.tokens.get(self.cursor % self.tokens.len())
    }

    pub fn as_slice(&self) -> &[ColorToken] {
        &self.tokens
    }
}
