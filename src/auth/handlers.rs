use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tower_cookies::Cookies;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest},
        password::{hash_password, verify_password},
        repo_types::User,
        services::{new_session_id, normalize_email, session_cookie},
    },
    error::{AppError, Result},
    state::AppState,
    validation::ValidatedJson,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let email = normalize_email(&payload.email);

    // Ensure email is not taken
    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

#[instrument(skip(state, cookies, payload))]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<MessageResponse>> {
    let email = normalize_email(&payload.email);

    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(%email, "login unknown email");
            return Err(AppError::InvalidCredentials("User not found".into()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(%email, user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials("Incorrect password".into()));
    }

    let session_id = match user.session_id {
        Some(existing) => existing,
        None => {
            // Read-then-write without a transaction: concurrent first logins
            // can each store a token, and the last write wins.
            let fresh = new_session_id();
            User::set_session(&state.db, user.id, &fresh).await?;
            info!(user_id = %user.id, "session created");
            fresh
        }
    };
    cookies.add(session_cookie(session_id, &state.config.session));

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(MessageResponse::new("Logged in")))
}
