//! Reply model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::TweetKind;

/// Reply entity, always attached to a parent tweet
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
    pub tweet_id: String,
    pub created_at: DateTime<Utc>,
}

/// New reply creation payload
#[derive(Debug, Clone)]
pub struct NewReply {
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
    pub tweet_id: String,
}

/// Reply projection returned by the HTTP surface
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: String,
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
    pub tweet_id: String,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            content: reply.content,
            kind: reply.kind,
            user_id: reply.user_id,
            tweet_id: reply.tweet_id,
        }
    }
}
