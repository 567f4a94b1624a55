//! Authentication routes: register, login, refresh, logout.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::{Duration, Utc};
use tracing::info;

use crate::{AppState, error::ApiError};
use fiscora_core::auth::{hash_password, verify_password};
use fiscora_db::{SessionRepository, UserRepository};
use fiscora_shared::AppError;
use fiscora_shared::auth::{
    LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest, TokenResponse, UserInfo,
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
}

/// POST /auth/register - Create an account and return tokens.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()).into());
    }
    if payload.password.len() < 8 {
        return Err(
            AppError::Validation("Password must be at least 8 characters".to_string()).into(),
        );
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".to_string()).into());
    }

    let users = UserRepository::new((*state.db).clone());
    if users.email_exists(&email).await? {
        return Err(AppError::Conflict("Email is already registered".to_string()).into());
    }

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let user = users
        .create(&email, &password_hash, payload.full_name.trim())
        .await?;

    info!(user_id = %user.id, "User registered");

    let tokens = issue_tokens(&state, &user, None).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// POST /auth/login - Authenticate and return tokens.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let users = UserRepository::new((*state.db).clone());

    let Some(user) = users.find_by_email(&payload.email).await? else {
        info!(email = %payload.email, "Login attempt for unknown email");
        return Err(invalid_credentials());
    };

    if !user.is_active {
        return Err(AppError::Unauthorized("This account has been disabled".to_string()).into());
    }

    let verified = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !verified {
        info!(user_id = %user.id, "Failed login attempt");
        return Err(invalid_credentials());
    }

    let tokens = issue_tokens(&state, &user, None).await?;
    Ok(Json(tokens))
}

/// POST /auth/refresh - Exchange a live refresh token for new tokens.
///
/// Rotates the session: the presented token's session is revoked and a new
/// one is created for the new refresh token.
async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Signature/expiry check first, then the server-side revocation check.
    state.jwt.validate_token(&payload.refresh_token)?;

    let sessions = SessionRepository::new((*state.db).clone());
    let Some(session) = sessions.find_live_by_token(&payload.refresh_token).await? else {
        return Err(AppError::Unauthorized("Session is no longer valid".to_string()).into());
    };

    let users = UserRepository::new((*state.db).clone());
    let user = users
        .find_by_id(session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Unauthorized("This account has been disabled".to_string()))?;

    sessions.revoke(session.id).await?;

    let tokens = issue_tokens(&state, &user, None).await?;
    Ok(Json(tokens))
}

/// POST /auth/logout - Revoke the refresh token's session.
async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<StatusCode, ApiError> {
    let sessions = SessionRepository::new((*state.db).clone());

    if let Some(session) = sessions.find_live_by_token(&payload.refresh_token).await? {
        sessions.revoke(session.id).await?;
        info!(session_id = %session.id, "Session revoked");
    }

    // Revoking an already-dead token is not an error.
    Ok(StatusCode::NO_CONTENT)
}

fn invalid_credentials() -> ApiError {
    AppError::Unauthorized("Invalid email or password".to_string()).into()
}

/// Issues an access/refresh pair and records the refresh session.
async fn issue_tokens(
    state: &AppState,
    user: &fiscora_db::entities::users::Model,
    user_agent: Option<&str>,
) -> Result<TokenResponse, ApiError> {
    let access_token = state.jwt.generate_access_token(user.id)?;
    let refresh_token = state.jwt.generate_refresh_token(user.id)?;

    let expires_at = Utc::now() + Duration::days(state.jwt.refresh_token_days());
    SessionRepository::new((*state.db).clone())
        .create(user.id, &refresh_token, expires_at, user_agent)
        .await?;

    Ok(TokenResponse {
        user: UserInfo {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        },
        access_token,
        refresh_token,
        expires_in: state.jwt.access_token_lifetime_secs(),
    })
}
