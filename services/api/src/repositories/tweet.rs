//! Tweet repository for database operations

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::error::ApiResult;
use crate::ids::SharedIdGenerator;
use crate::models::{FeedTweet, NewTweet, Tweet, TweetAuthor, TweetKind};

/// Tweet repository
#[derive(Clone)]
pub struct TweetRepository {
    pool: SqlitePool,
    ids: SharedIdGenerator,
}

impl TweetRepository {
    /// Create a new tweet repository
    pub fn new(pool: SqlitePool, ids: SharedIdGenerator) -> Self {
        Self { pool, ids }
    }

    /// Create a new tweet
    pub async fn create(&self, new_tweet: &NewTweet) -> ApiResult<Tweet> {
        info!("Creating tweet for user: {}", new_tweet.user_id);

        let tweet = Tweet {
            id: self.ids.generate(),
            content: new_tweet.content.clone(),
            kind: new_tweet.kind,
            user_id: new_tweet.user_id.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO tweets (id, content, kind, user_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&tweet.id)
        .bind(&tweet.content)
        .bind(tweet.kind)
        .bind(&tweet.user_id)
        .bind(tweet.created_at)
        .execute(&self.pool)
        .await?;

        Ok(tweet)
    }

    /// Get all tweets authored by a user
    pub async fn get_by_author(&self, user_id: &str) -> ApiResult<Vec<Tweet>> {
        let tweets = sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, content, kind, user_id, created_at
            FROM tweets
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tweets)
    }

    /// Find a tweet by ID regardless of author
    pub async fn find_by_id(&self, id: &str) -> ApiResult<Option<Tweet>> {
        let tweet = sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, content, kind, user_id, created_at
            FROM tweets
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tweet)
    }

    /// Find a tweet scoped by ID and author
    ///
    /// A wrong author resolves to None, indistinguishable from an absent
    /// tweet.
    pub async fn find_scoped(&self, id: &str, user_id: &str) -> ApiResult<Option<Tweet>> {
        let tweet = sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, content, kind, user_id, created_at
            FROM tweets
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tweet)
    }

    /// Update a tweet scoped by ID and author
    pub async fn update_scoped(
        &self,
        id: &str,
        user_id: &str,
        content: &str,
        kind: TweetKind,
    ) -> ApiResult<Option<Tweet>> {
        let result = sqlx::query(
            r#"
            UPDATE tweets
            SET content = ?, kind = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(content)
        .bind(kind)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_scoped(id, user_id).await
    }

    /// Delete a tweet scoped by ID and author, returning the removed row
    pub async fn delete_scoped(&self, id: &str, user_id: &str) -> ApiResult<Option<Tweet>> {
        let Some(tweet) = self.find_scoped(id, user_id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM tweets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(tweet))
    }

    /// Fetch every tweet authored by one of `author_ids`, each joined with
    /// its author's profile
    pub async fn get_feed(&self, author_ids: &[String]) -> ApiResult<Vec<FeedTweet>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; author_ids.len()].join(", ");
        let sql = format!(
            r#"
            SELECT t.id, t.content, t.kind, t.user_id,
                   u.id AS author_id, u.name AS author_name, u.username AS author_username
            FROM tweets t
            INNER JOIN users u ON u.id = t.user_id
            WHERE t.user_id IN ({placeholders})
            "#
        );

        let mut query = sqlx::query(&sql);
        for author_id in author_ids {
            query = query.bind(author_id);
        }

        let rows = query.fetch_all(&self.pool).await?;

        let feed = rows
            .into_iter()
            .map(|row| FeedTweet {
                id: row.get("id"),
                content: row.get("content"),
                kind: row.get("kind"),
                user_id: row.get("user_id"),
                user: TweetAuthor {
                    id: row.get("author_id"),
                    name: row.get("author_name"),
                    username: row.get("author_username"),
                },
            })
            .collect();

        Ok(feed)
    }
}
