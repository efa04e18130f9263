//! Core grid engine - pure, deterministic, and testable
//!
//! This crate contains the match-3 grid simulation: spawn color generation,
//! fill planning, gravity compaction and match detection. It has **zero
//! dependencies** on rendering, animation or any live scene objects:
//!
//! - **Deterministic**: Same seed, dimensions and palette produce the same game
//! - **Snapshot in, instructions out**: Queries read a caller-owned grid and
//!   return plans; the host applies them
//! - **Total**: No query fails; degenerate input degrades to a neutral result
//!
//! # Module Structure
//!
//! - [`palette`]: Ordered set of spawnable colors
//! - [`rng`]: LCG and the pre-generated spawn pool
//! - [`grid`]: Working copy of a snapshot, reshaped to configured dimensions
//! - [`matching`]: Run detection, whole-grid and single-cell
//! - [`chooser`]: Anti-match color selection from the pool
//! - [`fill`]: Spawn planning for empty cells
//! - [`compaction`]: Gravity moves
//! - [`orchestrator`]: Configuration, pool cursor and the host-facing queries
//! - [`config`]: File and environment configuration
//!
//! # Example
//!
//! ```
//! use blockwars_core::GridOrchestrator;
//! use blockwars_types::GridSnapshot;
//!
//! let mut engine = GridOrchestrator::new();
//! engine.set_row_count(3);
//! engine.set_column_count(3);
//!
//! // Fill an empty grid
//! let plan = engine.prepare_fill(&GridSnapshot::default());
//! assert_eq!(plan.len(), 9);
//! assert!(plan.iter().all(|i| i.spawn_row == -1));
//!
//! // Detect a run
//! let grid = GridSnapshot::from_keys(&[vec!["red", "red", "red"]]);
//! assert_eq!(engine.detect_matches(&grid).len(), 3);
//! ```

pub mod chooser;
pub mod compaction;
pub mod config;
pub mod fill;
pub mod grid;
pub mod matching;
pub mod orchestrator;
pub mod palette;
pub mod rng;

pub use blockwars_types as types;

// Re-export commonly used types for convenience
pub use chooser::{choose_from_pool, Choice, ChoiceOutcome};
pub use compaction::plan_compaction;
pub use config::{ConfigError, EngineConfig};
pub use fill::plan_fill;
pub use grid::Grid;
pub use matching::{detect_matches, runs_through, would_create_match, Axis, Run};
pub use orchestrator::{GridOrchestrator, SpawnStats};
pub use palette::Palette;
pub use rng::{pool_size, SimpleRng, SpawnPool};
