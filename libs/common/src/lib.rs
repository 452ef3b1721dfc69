//! Common library for the gorjeio workspace
//!
//! Provides the store infrastructure shared by the services: SQLite pool
//! configuration and initialization, liveness checks, and the error types
//! that go with them.

pub mod database;
pub mod error;


/// Example usage of the database module
///
/// ```rust,no_run
/// use common::database::{DatabaseConfig, init_pool, health_check};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig::from_env()?;
///     let pool = init_pool(&config).await?;
///     let is_healthy = health_check(&pool).await?;
///     println!("Database health check: {}", is_healthy);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
