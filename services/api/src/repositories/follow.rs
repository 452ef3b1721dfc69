//! Follow repository for database operations

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::error::ApiResult;
use crate::ids::SharedIdGenerator;
use crate::models::{Follow, FollowedProfile, FollowingEntry};

/// Follow repository
#[derive(Clone)]
pub struct FollowRepository {
    pool: SqlitePool,
    ids: SharedIdGenerator,
}

impl FollowRepository {
    /// Create a new follow repository
    pub fn new(pool: SqlitePool, ids: SharedIdGenerator) -> Self {
        Self { pool, ids }
    }

    /// Create a follow edge: `follower_id` starts following `followed_id`
    pub async fn create(&self, followed_id: &str, follower_id: &str) -> ApiResult<Follow> {
        info!("User {} starts following {}", follower_id, followed_id);

        let follow = Follow {
            id: self.ids.generate(),
            followed_id: followed_id.to_string(),
            follower_id: follower_id.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO follows (id, followed_id, follower_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&follow.id)
        .bind(&follow.followed_id)
        .bind(&follow.follower_id)
        .bind(follow.created_at)
        .execute(&self.pool)
        .await?;

        Ok(follow)
    }

    /// Find the edge recording that `follower_id` follows `followed_id`
    pub async fn find(&self, followed_id: &str, follower_id: &str) -> ApiResult<Option<Follow>> {
        let follow = sqlx::query_as::<_, Follow>(
            r#"
            SELECT id, followed_id, follower_id, created_at
            FROM follows
            WHERE followed_id = ? AND follower_id = ?
            "#,
        )
        .bind(followed_id)
        .bind(follower_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(follow)
    }

    /// Delete a follow edge by ID
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM follows WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// IDs of every user following `followed_id`
    pub async fn follower_ids(&self, followed_id: &str) -> ApiResult<Vec<String>> {
        let ids =
            sqlx::query_scalar::<_, String>("SELECT follower_id FROM follows WHERE followed_id = ?")
                .bind(followed_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids)
    }

    /// Users that `follower_id` follows, each joined with their profile
    pub async fn following(&self, follower_id: &str) -> ApiResult<Vec<FollowingEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT f.followed_id, u.id AS user_id, u.username
            FROM follows f
            INNER JOIN users u ON u.id = f.followed_id
            WHERE f.follower_id = ?
            "#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .map(|row| FollowingEntry {
                followed_id: row.get("followed_id"),
                user: FollowedProfile {
                    id: row.get("user_id"),
                    username: row.get("username"),
                },
            })
            .collect();

        Ok(entries)
    }
}
