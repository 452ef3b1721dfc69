//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::{
    feed::FeedService,
    ids::SharedIdGenerator,
    repositories::{
        FollowRepository, LikeRepository, ReplyRepository, TweetRepository, UserRepository,
    },
    session::SessionManager,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub tweet_repository: TweetRepository,
    pub reply_repository: ReplyRepository,
    pub follow_repository: FollowRepository,
    pub like_repository: LikeRepository,
    pub session_manager: SessionManager,
    pub feed_service: FeedService,
}

impl AppState {
    /// Wire the repositories and services over a pool and an id generator
    pub fn new(pool: SqlitePool, ids: SharedIdGenerator) -> Self {
        let user_repository = UserRepository::new(pool.clone(), ids.clone());
        let tweet_repository = TweetRepository::new(pool.clone(), ids.clone());
        let reply_repository = ReplyRepository::new(pool.clone(), ids.clone());
        let follow_repository = FollowRepository::new(pool.clone(), ids.clone());
        let like_repository = LikeRepository::new(pool.clone(), ids.clone());
        let session_manager = SessionManager::new(user_repository.clone(), ids.clone());
        let feed_service = FeedService::new(
            user_repository.clone(),
            tweet_repository.clone(),
            follow_repository.clone(),
        );

        Self {
            db_pool: pool,
            user_repository,
            tweet_repository,
            reply_repository,
            follow_repository,
            like_repository,
            session_manager,
            feed_service,
        }
    }
}
