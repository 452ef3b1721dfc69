//! Feed composition over the follow graph

use crate::error::{ApiError, ApiResult};
use crate::models::FeedTweet;
use crate::repositories::{FollowRepository, TweetRepository, UserRepository};

/// Composes a user's timeline from the content store and the follow graph
///
/// The author set is the user plus every user recorded as following them,
/// mirroring the stored edge direction as-is.
#[derive(Clone)]
pub struct FeedService {
    users: UserRepository,
    tweets: TweetRepository,
    follows: FollowRepository,
}

impl FeedService {
    /// Create a new feed service
    pub fn new(users: UserRepository, tweets: TweetRepository, follows: FollowRepository) -> Self {
        Self {
            users,
            tweets,
            follows,
        }
    }

    /// Compose the feed for a user
    pub async fn compose(&self, user_id: &str) -> ApiResult<Vec<FeedTweet>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::NotFound("User not found.".to_string()));
        }

        let mut author_ids = self.follows.follower_ids(user_id).await?;
        author_ids.push(user_id.to_string());

        self.tweets.get_feed(&author_ids).await
    }
}
