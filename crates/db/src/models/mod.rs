//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts

pub mod athlete;
pub mod game;
pub mod participant;
pub mod race_result;
pub mod roster;
pub mod session;
