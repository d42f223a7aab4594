//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod athlete_repo;
pub mod game_repo;
pub mod participant_repo;
pub mod race_result_repo;
pub mod roster_repo;
pub mod session_repo;

pub use athlete_repo::AthleteRepo;
pub use game_repo::GameRepo;
pub use participant_repo::ParticipantRepo;
pub use race_result_repo::RaceResultRepo;
pub use roster_repo::RosterRepo;
pub use session_repo::SessionRepo;
