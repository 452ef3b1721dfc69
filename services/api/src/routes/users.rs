//! User account routes

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    envelope::ApiEnvelope,
    error::ApiError,
    models::{NewUser, RegisteredUserResponse, UpdateUser, UserResponse},
    state::AppState,
    validation::required,
};

/// Registration payload
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar_url: Option<String>,
}

/// Account update payload
#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(email), Some(username), Some(password)) = (
        required(&payload.name),
        required(&payload.email),
        required(&payload.username),
        required(&payload.password),
    ) else {
        return Err(ApiError::Validation(
            "All required fields must be filled.".to_string(),
        ));
    };

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        avatar_url: payload.avatar_url.clone(),
    };

    let user = state.user_repository.create(&new_user).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::CREATED,
        "User registered successfully.",
        RegisteredUserResponse::from(user),
    ))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_repository.get_all().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Users listed successfully.",
        users,
    ))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "User found successfully.",
        UserResponse::from(user),
    ))
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let changes = UpdateUser {
        name: payload.name,
        email: payload.email,
        username: payload.username,
        password: payload.password,
    };

    let user = state
        .user_repository
        .update(&user_id, &changes)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "User updated successfully.",
        UserResponse::from(user),
    ))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .delete(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "User removed successfully.",
        UserResponse::from(user),
    ))
}
