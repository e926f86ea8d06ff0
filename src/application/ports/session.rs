// src/application/ports/session.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

/// Resolves the credential carried by a request to the signed-in user.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    /// `Ok(None)` means the request is not authenticated. `Err` is reserved
    /// for failures of the session backend itself.
    async fn authenticate(&self, credential: &str) -> ApplicationResult<Option<AuthenticatedUser>>;
}
