//! Tweet routes scoped by the authenticated path user

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
    models::{NewTweet, TweetKind, TweetResponse},
    state::AppState,
    validation::required,
};

/// Tweet payload for create and update
#[derive(Debug, Deserialize)]
pub struct TweetRequest {
    pub content: Option<String>,
    pub kind: Option<String>,
}

pub(crate) fn parse_kind(raw: &str) -> Result<TweetKind, ApiError> {
    raw.parse::<TweetKind>().map_err(|_| {
        ApiError::Validation("The 'kind' field must be either 'tweet' or 'reply'.".to_string())
    })
}

/// Create a tweet for the path user
pub async fn create_tweet(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<TweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(content), Some(kind)) = (required(&payload.content), required(&payload.kind)) else {
        return Err(ApiError::Validation(
            "The 'content' and 'kind' fields are required.".to_string(),
        ));
    };
    let kind = parse_kind(kind)?;

    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let tweet = state
        .tweet_repository
        .create(&NewTweet {
            content: content.to_string(),
            kind,
            user_id: user_id.clone(),
        })
        .await?;

    Ok(ApiEnvelope::ok(
        StatusCode::CREATED,
        "Tweet created successfully.",
        TweetResponse::from(tweet),
    ))
}

/// Get all tweets authored by the path user
pub async fn get_tweets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.user_repository.find_by_id(&user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let tweets = state.tweet_repository.get_by_author(&user_id).await?;
    let tweets: Vec<TweetResponse> = tweets.into_iter().map(TweetResponse::from).collect();

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Tweets listed successfully.",
        tweets,
    ))
}

/// Get one of the path user's tweets
pub async fn get_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let tweet = state
        .tweet_repository
        .find_scoped(&tweet_id, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tweet not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Tweet found successfully.",
        TweetResponse::from(tweet),
    ))
}

/// Update one of the path user's tweets
pub async fn update_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(String, String)>,
    Json(payload): Json<TweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(content), Some(kind)) = (required(&payload.content), required(&payload.kind)) else {
        return Err(ApiError::Validation(
            "The 'content' and 'kind' fields are required.".to_string(),
        ));
    };
    let kind = parse_kind(kind)?;

    let tweet = state
        .tweet_repository
        .update_scoped(&tweet_id, &user_id, content, kind)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tweet not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Tweet updated successfully.",
        TweetResponse::from(tweet),
    ))
}

/// Delete one of the path user's tweets
pub async fn delete_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let tweet = state
        .tweet_repository
        .delete_scoped(&tweet_id, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tweet not found.".to_string()))?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Tweet deleted successfully.",
        TweetResponse::from(tweet),
    ))
}

/// Compose the feed for the path user
pub async fn get_feed(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let feed = state.feed_service.compose(&user_id).await?;

    Ok(ApiEnvelope::ok(
        StatusCode::OK,
        "Feed loaded successfully.",
        feed,
    ))
}
