use crate::application::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Maps live session ids to the user that signed in. Sessions are written by
/// the login flow; this crate only reads them.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn user_for_session(&self, session_id: &str) -> ApplicationResult<Option<UserId>>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, UserId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session_id: impl Into<String>, user_id: UserId) {
        let mut guard = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(session_id.into(), user_id);
    }

    pub fn remove(&self, session_id: &str) -> Option<UserId> {
        let mut guard = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.remove(session_id)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn user_for_session(&self, session_id: &str) -> ApplicationResult<Option<UserId>> {
        let guard = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.get(session_id).cloned())
    }
}
