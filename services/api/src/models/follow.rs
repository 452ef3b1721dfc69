//! Follow edge model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Directed follow edge: `follower_id` follows `followed_id`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    pub id: String,
    pub followed_id: String,
    pub follower_id: String,
    pub created_at: DateTime<Utc>,
}

/// Follow edge projection returned by the HTTP surface
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub id: String,
    pub followed_id: String,
    pub follower_id: String,
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        Self {
            id: follow.id,
            followed_id: follow.followed_id,
            follower_id: follow.follower_id,
        }
    }
}

/// One entry of a user's followers listing
#[derive(Debug, Clone, Serialize)]
pub struct FollowerEntry {
    pub follower_id: String,
}

/// Profile of a followed user embedded in the following listing
#[derive(Debug, Clone, Serialize)]
pub struct FollowedProfile {
    pub id: String,
    pub username: String,
}

/// One entry of a user's following listing
#[derive(Debug, Clone, Serialize)]
pub struct FollowingEntry {
    pub followed_id: String,
    pub user: FollowedProfile,
}
