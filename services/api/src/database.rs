//! Schema bootstrap for the API service store

use common::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use tracing::info;

/// Schema statements executed in order at startup
///
/// No foreign keys are declared: deletes do not cascade and orphaned
/// dependent rows stay behind. Email/username and the two edge pairs are
/// unique at the storage layer.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        avatar_url TEXT,
        token TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tweets (
        id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        kind TEXT NOT NULL,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS replies (
        id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        kind TEXT NOT NULL,
        user_id TEXT NOT NULL,
        tweet_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS follows (
        id TEXT PRIMARY KEY,
        followed_id TEXT NOT NULL,
        follower_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (followed_id, follower_id)
    )",
    "CREATE TABLE IF NOT EXISTS likes (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        tweet_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (user_id, tweet_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_tweets_user_id ON tweets (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_replies_tweet_id ON replies (tweet_id)",
    "CREATE INDEX IF NOT EXISTS idx_likes_tweet_id ON likes (tweet_id)",
    "CREATE INDEX IF NOT EXISTS idx_follows_followed_id ON follows (followed_id)",
];

/// Create the tables and indexes if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> DatabaseResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(DatabaseError::Schema)?;
    }

    info!("Database schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::init_memory_pool;
    use sqlx::Row;

    #[tokio::test]
    async fn creates_all_tables() {
        let pool = init_memory_pool().await.unwrap();
        init_schema(&pool).await.unwrap();

        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM sqlite_master \
             WHERE type = 'table' AND name IN ('users', 'tweets', 'replies', 'follows', 'likes')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        let count: i64 = row.get("count");
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = init_memory_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
    }
}
