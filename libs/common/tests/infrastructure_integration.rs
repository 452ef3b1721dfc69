//! Integration tests for the infrastructure components
//!
//! These tests verify that the SQLite store is properly configured and
//! accessible from the application.

use common::database::{DatabaseConfig, health_check, init_memory_pool, init_pool};
use sqlx::Row;

/// Test that verifies the database is accessible and can perform basic
/// operations
#[tokio::test]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    let pool = init_memory_pool().await?;

    // Verify SQLite connectivity
    assert!(health_check(&pool).await?, "Database health check failed");

    // Perform a simple query to test database connectivity
    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;

    let result: i32 = row.get("result");
    assert_eq!(result, 1, "SQLite simple query test failed");

    Ok(())
}

/// Test that a file-backed pool can be created from an explicit configuration
#[tokio::test]
async fn test_file_pool_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = std::env::temp_dir().join("gorjeio-infra-test.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}", db_path.display()),
        max_connections: 2,
    };

    let pool = init_pool(&config).await?;
    assert!(health_check(&pool).await?, "Database health check failed");

    pool.close().await;
    let _ = std::fs::remove_file(&db_path);

    Ok(())
}
