//! Reply routes
//!
//! Creation hangs off the authenticated path user; the detail operations
//! are scoped by tweet and reply ID only.

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
    models::{NewReply, ReplyResponse},
    routes::tweets::parse_kind,
    state::AppState,
    validation::required,
};

/// Reply creation payload
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub content: Option<String>,
    pub kind: Option<String>,
    pub tweet_id: Option<String>,
}

/// Reply update payload
#[derive(Debug, Deserialize)]
pub struct UpdateReplyRequest {
    pub content: Option<String>,
    pub kind: Option<String>,
}

/// Create a reply to a tweet as the path user
pub async fn create_reply(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(content), Some(kind), Some(tweet_id)) = (
        required(&payload.content),
        required(&payload.kind),
        required(&payload.tweet_id),
    ) else {
        return Err(ApiError::Validation(
            "The 'content', 'kind' and 'tweet_id' fields are required.".to_string(),
        ));
    };
    let kind = parse_kind(kind)?;

    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    if state.tweet_repository.find_by_id(tweet_id).await?.is_none() {
        return Err(ApiError::NotFound("Tweet not found.".to_string()));
    }

    let reply = state
        .reply_repository
        .create(&NewReply {
            content: content.to_string(),
            kind,
            user_id: user_id.clone(),
            tweet_id: tweet_id.to_string(),
        })
        .await?;

    Ok(ApiEnvelope::ok(
        StatusCode::CREATED,
        "Reply created successfully.",
        ReplyResponse::from(reply),
    ))
}

/// Get all replies for a tweet
pub async fn get_replies(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.tweet_repository.find_by_id(&tweet_id).await?.is_none() {
        return Err(ApiError::NotFound("Tweet not found.".to_string()));
    }

    let replies = state.reply_repository.get_by_tweet(&tweet_id).await?;
    let replies: Vec<ReplyResponse> = replies.into_iter().map(ReplyResponse::from).collect();

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Replies listed successfully.",
        replies,
    ))
}

/// Get a reply scoped by its tweet
pub async fn get_reply(
    State(state): State<AppState>,
    Path((tweet_id, reply_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let reply = state
        .reply_repository
        .find_scoped(&tweet_id, &reply_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Reply found successfully.",
        ReplyResponse::from(reply),
    ))
}

/// Update a reply scoped by its tweet, regardless of author
pub async fn update_reply(
    State(state): State<AppState>,
    Path((tweet_id, reply_id)): Path<(String, String)>,
    Json(payload): Json<UpdateReplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(content), Some(kind)) = (required(&payload.content), required(&payload.kind)) else {
        return Err(ApiError::Validation(
            "The 'content' and 'kind' fields are required.".to_string(),
        ));
    };
    let kind = parse_kind(kind)?;

    let reply = state
        .reply_repository
        .update_scoped(&tweet_id, &reply_id, content, kind)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Reply updated successfully.",
        ReplyResponse::from(reply),
    ))
}

/// Delete a reply scoped by its tweet, regardless of author
pub async fn delete_reply(
    State(state): State<AppState>,
    Path((tweet_id, reply_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let reply = state
        .reply_repository
        .delete_scoped(&tweet_id, &reply_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Reply deleted successfully.",
        ReplyResponse::from(reply),
    ))
}
