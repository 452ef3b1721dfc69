//! Like edge model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Like edge: `user_id` liked `tweet_id`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub tweet_id: String,
    pub created_at: DateTime<Utc>,
}

/// Like edge projection returned by the HTTP surface
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub id: String,
    pub user_id: String,
    pub tweet_id: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            tweet_id: like.tweet_id,
        }
    }
}
