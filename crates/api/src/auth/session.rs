//! Session-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use capdraft_core::error::CoreError;
use capdraft_core::types::DbId;
use capdraft_db::repositories::SessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated player identity extracted from a Bearer session token.
///
/// Use this as an extractor parameter in any handler that writes roster
/// state:
///
/// ```ignore
/// async fn my_handler(identity: PlayerIdentity) -> AppResult<Json<()>> {
///     tracing::info!(game_id = identity.game_id, player = %identity.player_code, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlayerIdentity {
    /// The session row id (used for logout).
    pub session_id: DbId,
    /// The game this session is bound to.
    pub game_id: DbId,
    /// The player this session is bound to.
    pub player_code: String,
}

impl FromRequestParts<AppState> for PlayerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        // Expired, deactivated, and unknown tokens are indistinguishable
        // by design; the client reaction is the same (re-join the game).
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Session expired or invalid".into()))
            })?;

        Ok(PlayerIdentity {
            session_id: session.id,
            game_id: session.game_id,
            player_code: session.player_code,
        })
    }
}
