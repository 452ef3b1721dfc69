//! Follow relationship routes

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
    models::{FollowResponse, FollowerEntry},
    state::AppState,
    validation::required,
};

/// Follow request payload
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub follow_user_id: Option<String>,
}

/// List the users following the path user
pub async fn get_followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let follower_ids = state.follow_repository.follower_ids(&user_id).await?;
    let followers: Vec<FollowerEntry> = follower_ids
        .into_iter()
        .map(|follower_id| FollowerEntry { follower_id })
        .collect();

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Followers listed successfully.",
        followers,
    ))
}

/// Follow another user as the path user
pub async fn follow_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<FollowRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(follow_user_id) = required(&payload.follow_user_id) else {
        return Err(ApiError::Validation(
            "The 'follow_user_id' field is required.".to_string(),
        ));
    };

    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    if state
        .user_repository
        .find_by_id(follow_user_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("User to follow not found.".to_string()));
    }

    if follow_user_id == user_id {
        return Err(ApiError::Conflict(
            "You cannot follow yourself.".to_string(),
        ));
    }

    if state
        .follow_repository
        .find(follow_user_id, &user_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "You already follow this user.".to_string(),
        ));
    }

    // The path user becomes a follower of the requested user
    let follow = state
        .follow_repository
        .create(follow_user_id, &user_id)
        .await?;

    Ok(ApiEnvelope::ok(
        StatusCode::CREATED,
        "You are now following this user.",
        FollowResponse::from(follow),
    ))
}

/// List the users the path user follows
pub async fn get_following(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let following = state.follow_repository.following(&user_id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Following list retrieved successfully.",
        following,
    ))
}

/// Stop following another user
pub async fn unfollow_user(
    State(state): State<AppState>,
    Path((user_id, follow_user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let follow = state
        .follow_repository
        .find(&follow_user_id, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("You do not follow this user.".to_string()))?;

    state.follow_repository.delete(&follow.id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "You have unfollowed this user.",
        FollowResponse::from(follow),
    ))
}
