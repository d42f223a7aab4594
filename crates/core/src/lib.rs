//! Capdraft domain logic.
//!
//! Pure, database-free building blocks for the salary-cap draft game:
//! race-time parsing and comparison, roster draft state, the auto-save
//! decision policy, and the debounced save trigger. This crate has zero
//! internal deps so it can be used by the API layer, tests, and any future
//! CLI tooling.

pub mod autosave;
pub mod error;
pub mod roster;
pub mod time;
pub mod types;

pub use error::CoreError;
