//! Like routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{envelope::ApiEnvelope, error::ApiError, models::LikeResponse, state::AppState};

/// Get all likes for a tweet
pub async fn get_likes(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.tweet_repository.find_by_id(&tweet_id).await?.is_none() {
        return Err(ApiError::NotFound("Tweet not found.".to_string()));
    }

    let likes = state.like_repository.get_by_tweet(&tweet_id).await?;
    let likes: Vec<LikeResponse> = likes.into_iter().map(LikeResponse::from).collect();

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Likes retrieved successfully.",
        likes,
    ))
}

/// Like a tweet as the path user
///
/// Neither endpoint of the edge is checked for existence; the pair is
/// only guarded against duplicates.
pub async fn like_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    if state
        .like_repository
        .find(&user_id, &tweet_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "You have already liked this tweet.".to_string(),
        ));
    }

    let like = state.like_repository.create(&user_id, &tweet_id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::CREATED,
        "Tweet liked successfully.",
        LikeResponse::from(like),
    ))
}

/// Remove the path user's like from a tweet
pub async fn unlike_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let like = state
        .like_repository
        .find(&user_id, &tweet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No like found for this tweet.".to_string()))?;

    state.like_repository.delete(&like.id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Tweet unliked successfully.",
        json!({ "id": like.id }),
    ))
}
