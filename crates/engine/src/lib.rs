//! Headless host for the grid engine
//!
//! The engine itself only returns plans. This crate is the smallest host that
//! applies them: [`apply`] turns spawn instructions and moves into grid
//! mutations (rejecting plans that do not fit the grid), and [`session`] runs
//! the clear/compact/fill cascade used by the CLI and the integration tests.

pub mod apply;
pub mod session;

pub use blockwars_core as core;
pub use blockwars_types as types;

pub use apply::{apply_moves, apply_spawns, clear_cells, ApplyError};
pub use session::{PassReport, Session, SettleReport};
