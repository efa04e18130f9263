//! Blockwars grid engine (workspace facade crate).
//!
//! Re-exports the member crates as `blockwars::{types, core, engine}` so
//! hosts and tests depend on a single package.

pub use blockwars_core as core;
pub use blockwars_engine as engine;
pub use blockwars_types as types;
