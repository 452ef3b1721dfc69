//! Micro-blogging API service
//!
//! Exposes user registration and login, tweets and replies, likes, follow
//! relationships, and per-user feeds over a SQLite store.

pub mod database;
pub mod envelope;
pub mod error;
pub mod feed;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;
pub mod validation;

pub use state::AppState;
