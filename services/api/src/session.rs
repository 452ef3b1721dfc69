//! Session token management
//!
//! Each user holds at most one active token, stored on the user row. A new
//! login overwrites the previous token, which immediately stops validating.

use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::ids::SharedIdGenerator;
use crate::repositories::UserRepository;

/// Session manager for issuing and validating per-user tokens
#[derive(Clone)]
pub struct SessionManager {
    users: UserRepository,
    ids: SharedIdGenerator,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(users: UserRepository, ids: SharedIdGenerator) -> Self {
        Self { users, ids }
    }

    /// Issue a fresh token for a user, replacing any previous one
    pub async fn issue_token(&self, user_id: &str) -> ApiResult<String> {
        info!("Issuing session token for user: {}", user_id);

        let token = self.ids.generate();
        self.users.set_token(user_id, &token).await?;

        Ok(token)
    }

    /// Validate a bearer token against the user claimed in the request path
    ///
    /// The check answers whether the token matches that specific user's
    /// stored token, never whose token it is. Without a claimed user there
    /// is nothing the token could bind to. A store failure here is reported
    /// with its cause, unlike the other 500 paths.
    pub async fn validate(&self, claimed_user_id: Option<&str>, token: &str) -> ApiResult<()> {
        let Some(user_id) = claimed_user_id else {
            return Err(ApiError::Unauthorized(
                "Invalid authentication token.".to_string(),
            ));
        };

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::AuthFailed(e.to_string()))?;

        match user {
            Some(user) if user.token.as_deref() == Some(token) => Ok(()),
            _ => Err(ApiError::Unauthorized(
                "Invalid authentication token.".to_string(),
            )),
        }
    }
}
