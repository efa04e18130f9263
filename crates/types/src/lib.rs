//! Core types module - shared data structures and constants
//!
//! This module defines the plain values that cross the boundary between the
//! grid engine and its host. Nothing here owns behaviour beyond parsing and
//! normalization, so the types are usable in any context (engine, headless
//! host, CLI, serialized fixtures).
//!
//! # Grid Coordinates
//!
//! - **Rows** are indexed `0..rows`, top to bottom
//! - **Columns** are indexed `0..columns`, left to right
//! - Spawn rows are conceptual: `-1` above the top edge, `rows` below the bottom edge
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 6 | Configured row count |
//! | `DEFAULT_COLUMNS` | 6 | Configured column count |
//! | `DEFAULT_SEED` | 1 | Initial LCG state |
//! | `DEFAULT_HP` | 10 | Hit points attached to every spawn spec |
//! | `MIN_MATCH_RUN` | 3 | Shortest run that counts as a match |
//! | `POOL_CELL_MULTIPLIER` | 4 | Pool entries per grid cell |
//!
//! # Examples
//!
//! ```
//! use blockwars_types::{ColorToken, FillDirection, GridSnapshot};
//!
//! // Tokens compare by key only
//! let a = ColorToken::new("red", "#ef4444");
//! let b = ColorToken::new("red", "#ff0000");
//! assert_eq!(a, b);
//!
//! // Any integer normalizes to one of two directions
//! assert_eq!(FillDirection::from_i32(7), FillDirection::Downward);
//! assert_eq!(FillDirection::from_i32(-3), FillDirection::Upward);
//!
//! // Empty strings are empty cells
//! let grid = GridSnapshot::from_keys(&[vec!["red", ""]]);
//! assert_eq!(grid.cell(0, 0), Some("red"));
//! assert_eq!(grid.cell(0, 1), None);
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Default grid height (6 rows)
pub const DEFAULT_ROWS: usize = 6;

/// Default grid width (6 columns)
pub const DEFAULT_COLUMNS: usize = 6;

/// Default spawn seed
pub const DEFAULT_SEED: u32 = 1;

/// Hit points carried by every spawned piece
pub const DEFAULT_HP: u32 = 10;

/// Shortest horizontal or vertical run that counts as a match
pub const MIN_MATCH_RUN: usize = 3;

/// Spawn pool entries generated per grid cell
pub const POOL_CELL_MULTIPLIER: usize = 4;

/// LCG multiplier (Numerical Recipes)
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes)
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Key of the neutral token used when no palette is available
pub const FALLBACK_COLOR_KEY: &str = "gray";

/// Display value of the neutral fallback token
pub const FALLBACK_COLOR_HEX: &str = "#737373";

/// A color/kind identifier with its display value
///
/// Equality and hashing use `key` only; `hex` is carried through untouched.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    pub key: String,
    pub hex: String,
}

impl ColorToken {
    pub fn new(key: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            hex: hex.into(),
        }
    }

    /// The neutral token returned when the palette is empty
    pub fn fallback() -> Self {
        Self::new(FALLBACK_COLOR_KEY, FALLBACK_COLOR_HEX)
    }

    /// Build the spawn spec for this token with the default hit points
    pub fn to_spec(&self) -> ColorSpec {
        ColorSpec {
            color_key: self.key.clone(),
            color_hex: self.hex.clone(),
            hp: DEFAULT_HP,
        }
    }
}

impl PartialEq for ColorToken {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Hash for ColorToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Which edge gravity pulls toward
///
/// - **Downward**: pieces settle on the last row and spawn above row 0
/// - **Upward**: pieces settle on row 0 and spawn below the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillDirection {
    #[default]
    Downward,
    Upward,
}

impl FillDirection {
    /// Normalize an integer: non-negative is downward, negative is upward
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwars_types::FillDirection;
    ///
    /// assert_eq!(FillDirection::from_i32(0), FillDirection::Downward);
    /// assert_eq!(FillDirection::from_i32(-1), FillDirection::Upward);
    /// ```
    pub fn from_i32(value: i32) -> Self {
        if value >= 0 {
            FillDirection::Downward
        } else {
            FillDirection::Upward
        }
    }

    /// Integer form used by hosts that store the direction as a number
    pub fn as_i32(&self) -> i32 {
        match self {
            FillDirection::Downward => 1,
            FillDirection::Upward => -1,
        }
    }

    /// Parse from a name ("downward" | "down", "upward" | "up") or an integer
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "downward" | "down" => Some(FillDirection::Downward),
            "upward" | "up" => Some(FillDirection::Upward),
            other => other.parse::<i32>().ok().map(FillDirection::from_i32),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FillDirection::Downward => "downward",
            FillDirection::Upward => "upward",
        }
    }

    /// Conceptual row new pieces enter from
    pub fn spawn_row(&self, rows: usize) -> isize {
        match self {
            FillDirection::Downward => -1,
            FillDirection::Upward => rows as isize,
        }
    }
}

/// A cell position
///
/// Ordered row-major so sets of coordinates iterate top-left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Everything the host needs to create a piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpec {
    pub color_key: String,
    pub color_hex: String,
    pub hp: u32,
}

/// One piece to create and drop into an empty cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnInstruction {
    pub column: usize,
    pub target_row: usize,
    /// `-1` (above the grid) or `rows` (below the grid)
    pub spawn_row: isize,
    pub spec: ColorSpec,
}

/// Slide an existing piece within its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from_row: usize,
    pub to_row: usize,
    pub column: usize,
}

/// Typed "changed" notification returned by configuration setters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigChange {
    RowCount,
    ColumnCount,
    FillDirection,
    SpawnSeed,
    Palette,
}

impl ConfigChange {
    /// Name of the notification as hosts usually spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigChange::RowCount => "rowCountChanged",
            ConfigChange::ColumnCount => "columnCountChanged",
            ConfigChange::FillDirection => "fillDirectionChanged",
            ConfigChange::SpawnSeed => "spawnSeedChanged",
            ConfigChange::Palette => "paletteChanged",
        }
    }

    /// Whether this change invalidates the spawn pool
    pub fn rebuilds_pool(&self) -> bool {
        !matches!(self, ConfigChange::FillDirection)
    }
}

/// Grid as the host hands it over: rows of optional color keys
///
/// Shape is not validated here. The engine reshapes every snapshot to its
/// configured dimensions, so short rows, missing rows and extra cells are all
/// acceptable. `None` and `""` both mean an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridSnapshot {
    pub rows: Vec<Vec<Option<String>>>,
}

impl GridSnapshot {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Build from plain string keys, treating `""` as empty
    pub fn from_keys<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|key| {
                        let key = key.as_ref();
                        if key.is_empty() {
                            None
                        } else {
                            Some(key.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Key at (row, column), or None when empty or absent
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
            .filter(|key| !key.is_empty())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
