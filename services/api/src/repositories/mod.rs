//! Repositories for database operations

pub mod follow;
pub mod like;
pub mod reply;
pub mod tweet;
pub mod user;

pub use follow::FollowRepository;
pub use like::LikeRepository;
pub use reply::ReplyRepository;
pub use tweet::TweetRepository;
pub use user::UserRepository;
