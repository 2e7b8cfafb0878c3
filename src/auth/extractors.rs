use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_cookies::Cookies;
use tracing::debug;
use uuid::Uuid;

use super::{repo_types::User, services::SESSION_COOKIE};
use crate::{error::AppError, state::AppState};

/// Resolves the `sessionId` cookie to the id of the user who owns it.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;

        let session_id = cookies
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Unauthenticated("missing session, please log in".into()))?;

        let user = User::find_by_session(&state.db, &session_id)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("unknown session".into()))?;

        debug!(user_id = %user.id, "session resolved");
        Ok(AuthUser(user.id))
    }
}
