//! Anonymous session-token authentication.
//!
//! Players are anonymous: joining a game issues an opaque token bound to
//! one `(game_id, player_code)` pair. No passwords, no JWT.

pub mod session;
pub mod token;
