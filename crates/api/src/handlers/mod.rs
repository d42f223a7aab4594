//! HTTP handlers, one module per resource.

pub mod athletes;
pub mod games;
pub mod participants;
pub mod results;
pub mod roster;
pub mod sessions;
