//! Like repository for database operations

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::ApiResult;
use crate::ids::SharedIdGenerator;
use crate::models::Like;

/// Like repository
#[derive(Clone)]
pub struct LikeRepository {
    pool: SqlitePool,
    ids: SharedIdGenerator,
}

impl LikeRepository {
    /// Create a new like repository
    pub fn new(pool: SqlitePool, ids: SharedIdGenerator) -> Self {
        Self { pool, ids }
    }

    /// Create a like edge for a (user, tweet) pair
    pub async fn create(&self, user_id: &str, tweet_id: &str) -> ApiResult<Like> {
        info!("User {} likes tweet {}", user_id, tweet_id);

        let like = Like {
            id: self.ids.generate(),
            user_id: user_id.to_string(),
            tweet_id: tweet_id.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO likes (id, user_id, tweet_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&like.id)
        .bind(&like.user_id)
        .bind(&like.tweet_id)
        .bind(like.created_at)
        .execute(&self.pool)
        .await?;

        Ok(like)
    }

    /// Find the like edge for a (user, tweet) pair
    pub async fn find(&self, user_id: &str, tweet_id: &str) -> ApiResult<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, user_id, tweet_id, created_at
            FROM likes
            WHERE user_id = ? AND tweet_id = ?
            "#,
        )
        .bind(user_id)
        .bind(tweet_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(like)
    }

    /// Delete a like edge by ID
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM likes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Get all likes for a tweet
    pub async fn get_by_tweet(&self, tweet_id: &str) -> ApiResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, user_id, tweet_id, created_at
            FROM likes
            WHERE tweet_id = ?
            "#,
        )
        .bind(tweet_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }
}
