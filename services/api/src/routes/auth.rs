//! Login route issuing session tokens

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{envelope::ApiEnvelope, error::ApiError, state::AppState, validation::required};

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response carrying the fresh session token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Authenticate a user and rotate their session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(password)) = (required(&payload.email), required(&payload.password))
    else {
        return Err(ApiError::Validation(
            "The 'email' and 'password' fields are required.".to_string(),
        ));
    };

    // The same message covers an unknown email and a wrong password
    let user = state
        .user_repository
        .find_by_email(email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials.".to_string()))?;

    if !state.user_repository.verify_password(&user, password).await? {
        return Err(ApiError::Unauthorized("Invalid credentials.".to_string()));
    }

    let token = state.session_manager.issue_token(&user.id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Login successful.",
        LoginResponse {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            token,
        },
    ))
}
