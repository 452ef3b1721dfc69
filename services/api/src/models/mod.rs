//! Data models for the API service

pub mod follow;
pub mod like;
pub mod reply;
pub mod tweet;
pub mod user;

// Re-export for convenience
pub use follow::{Follow, FollowResponse, FollowedProfile, FollowerEntry, FollowingEntry};
pub use like::{Like, LikeResponse};
pub use reply::{NewReply, Reply, ReplyResponse};
pub use tweet::{FeedTweet, NewTweet, Tweet, TweetAuthor, TweetKind, TweetResponse};
pub use user::{NewUser, RegisteredUserResponse, UpdateUser, User, UserResponse};
