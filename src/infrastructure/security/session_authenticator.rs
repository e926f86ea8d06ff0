use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{
    ApplicationResult, dto::AuthenticatedUser, ports::session::SessionAuthenticator,
};
use crate::infrastructure::security::{session_signer::SessionSigner, session_store::SessionStore};

/// Verifies the cookie signature, then resolves the session id in the store.
pub struct SignedSessionAuthenticator {
    signer: SessionSigner,
    store: Arc<dyn SessionStore>,
}

impl SignedSessionAuthenticator {
    pub fn new(signer: SessionSigner, store: Arc<dyn SessionStore>) -> Self {
        Self { signer, store }
    }
}

#[async_trait]
impl SessionAuthenticator for SignedSessionAuthenticator {
    async fn authenticate(&self, credential: &str) -> ApplicationResult<Option<AuthenticatedUser>> {
        let Some(session_id) = self.signer.verify(credential) else {
            tracing::debug!("session cookie failed signature check");
            return Ok(None);
        };

        let user = self
            .store
            .user_for_session(session_id)
            .await?
            .map(|user_id| AuthenticatedUser::new(user_id).with_session(session_id));
        Ok(user)
    }
}
