//! Tweet model and related functionality

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Discriminates top-level tweets from reply-kind rows, stored as TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TweetKind {
    Tweet,
    Reply,
}

impl TweetKind {
    /// Wire representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TweetKind::Tweet => "tweet",
            TweetKind::Reply => "reply",
        }
    }
}

impl fmt::Display for TweetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TweetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tweet" => Ok(TweetKind::Tweet),
            "reply" => Ok(TweetKind::Reply),
            other => Err(format!("Unknown tweet kind: {}", other)),
        }
    }
}

/// Tweet entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tweet {
    pub id: String,
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// New tweet creation payload
#[derive(Debug, Clone)]
pub struct NewTweet {
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
}

/// Tweet projection returned by the HTTP surface
#[derive(Debug, Clone, Serialize)]
pub struct TweetResponse {
    pub id: String,
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
}

impl From<Tweet> for TweetResponse {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id,
            content: tweet.content,
            kind: tweet.kind,
            user_id: tweet.user_id,
        }
    }
}

/// Author profile attached to feed entries
#[derive(Debug, Clone, Serialize)]
pub struct TweetAuthor {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// Feed entry: a tweet joined with its author's profile
#[derive(Debug, Clone, Serialize)]
pub struct FeedTweet {
    pub id: String,
    pub content: String,
    pub kind: TweetKind,
    pub user_id: String,
    pub user: TweetAuthor,
}
