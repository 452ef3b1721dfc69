//! Middleware for session token validation

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, state::AppState};

/// Validate the bearer token against the user ID in the request path
pub async fn auth_middleware(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Authentication token not provided.".to_string()))?;

    // Check that the header carries a bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid token.".to_string()))?;

    state
        .session_manager
        .validate(params.get("user_id").map(String::as_str), token)
        .await?;

    // Call the next service
    let response = next.run(req).await;

    Ok(response)
}
