//! Authentication route handlers.
//!
//! All operations run against the in-memory mock registry; there is no
//! real identity backend behind these endpoints.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::user::{NewUser, ProfileUpdate, PublicUser};
use crate::services::auth::{AuthError, AuthService, PasswordStrength, password_strength};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Change password form data.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
}

/// Generic success response.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Change password response, including the new password's strength for
/// the meter.
#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
    pub strength: PasswordStrength,
    pub strength_label: &'static str,
}

/// Register a new account.
///
/// POST /auth/register
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<NewUser>,
) -> Result<Json<PublicUser>> {
    let user = state.with_users_mut(|registry| AuthService::new(registry).register(form))?;
    tracing::info!(user_id = %user.id, "User registered");
    Ok(Json(user))
}

/// Login and start a session.
///
/// POST /auth/login
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<PublicUser>> {
    let user = state
        .with_users_mut(|registry| AuthService::new(registry).login(&form.email, &form.password))?;
    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(user))
}

/// Clear the session.
///
/// POST /auth/logout
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.with_users_mut(|registry| AuthService::new(registry).logout());
    Json(SuccessResponse { success: true })
}

/// The current session's user.
///
/// GET /auth/me
#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Result<Json<PublicUser>> {
    state
        .with_users(|registry| registry.current().map(PublicUser::from))
        .map(Json)
        .ok_or(AppError::Auth(AuthError::NotAuthenticated))
}

/// Merge profile fields into the current account.
///
/// PUT /auth/profile
#[instrument(skip(state, form))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(form): Json<ProfileUpdate>,
) -> Result<Json<PublicUser>> {
    let user =
        state.with_users_mut(|registry| AuthService::new(registry).update_profile(form))?;
    Ok(Json(user))
}

/// Change the current account's password.
///
/// POST /auth/password
#[instrument(skip(state, form))]
pub async fn change_password(
    State(state): State<AppState>,
    Json(form): Json<ChangePasswordForm>,
) -> Result<Json<ChangePasswordResponse>> {
    state.with_users_mut(|registry| {
        AuthService::new(registry).change_password(&form.current_password, &form.new_password)
    })?;

    let strength = password_strength(&form.new_password);
    Ok(Json(ChangePasswordResponse {
        success: true,
        strength,
        strength_label: strength.label(),
    }))
}
