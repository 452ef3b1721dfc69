//! Reply repository for database operations

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::ApiResult;
use crate::ids::SharedIdGenerator;
use crate::models::{NewReply, Reply, TweetKind};

/// Reply repository
///
/// Lookups are scoped by tweet and reply ID only; authorship is not part
/// of the key.
#[derive(Clone)]
pub struct ReplyRepository {
    pool: SqlitePool,
    ids: SharedIdGenerator,
}

impl ReplyRepository {
    /// Create a new reply repository
    pub fn new(pool: SqlitePool, ids: SharedIdGenerator) -> Self {
        Self { pool, ids }
    }

    /// Create a new reply
    pub async fn create(&self, new_reply: &NewReply) -> ApiResult<Reply> {
        info!(
            "Creating reply to tweet {} for user: {}",
            new_reply.tweet_id, new_reply.user_id
        );

        let reply = Reply {
            id: self.ids.generate(),
            content: new_reply.content.clone(),
            kind: new_reply.kind,
            user_id: new_reply.user_id.clone(),
            tweet_id: new_reply.tweet_id.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO replies (id, content, kind, user_id, tweet_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reply.id)
        .bind(&reply.content)
        .bind(reply.kind)
        .bind(&reply.user_id)
        .bind(&reply.tweet_id)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await?;

        Ok(reply)
    }

    /// Get all replies for a tweet
    pub async fn get_by_tweet(&self, tweet_id: &str) -> ApiResult<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, content, kind, user_id, tweet_id, created_at
            FROM replies
            WHERE tweet_id = ?
            "#,
        )
        .bind(tweet_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(replies)
    }

    /// Find a reply scoped by tweet and reply ID
    pub async fn find_scoped(&self, tweet_id: &str, reply_id: &str) -> ApiResult<Option<Reply>> {
        let reply = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, content, kind, user_id, tweet_id, created_at
            FROM replies
            WHERE id = ? AND tweet_id = ?
            "#,
        )
        .bind(reply_id)
        .bind(tweet_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reply)
    }

    /// Update a reply scoped by tweet and reply ID
    pub async fn update_scoped(
        &self,
        tweet_id: &str,
        reply_id: &str,
        content: &str,
        kind: TweetKind,
    ) -> ApiResult<Option<Reply>> {
        let result = sqlx::query(
            r#"
            UPDATE replies
            SET content = ?, kind = ?
            WHERE id = ? AND tweet_id = ?
            "#,
        )
        .bind(content)
        .bind(kind)
        .bind(reply_id)
        .bind(tweet_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_scoped(tweet_id, reply_id).await
    }

    /// Delete a reply scoped by tweet and reply ID, returning the removed row
    pub async fn delete_scoped(&self, tweet_id: &str, reply_id: &str) -> ApiResult<Option<Reply>> {
        let Some(reply) = self.find_scoped(tweet_id, reply_id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM replies WHERE id = ?")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        Ok(Some(reply))
    }
}
