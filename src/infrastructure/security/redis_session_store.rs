// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::domain::user::UserId;
use crate::infrastructure::security::session_store::SessionStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Pool, Runtime};
use redis::AsyncCommands;

/// Reads sessions stored as `session:<id>` → user id string.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    fn key(session_id: &str) -> String {
        format!("session:{session_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn user_for_session(&self, session_id: &str) -> ApplicationResult<Option<UserId>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let stored: Option<String> = conn
            .get(Self::key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(stored.and_then(|raw| match UserId::new(&raw) {
            Ok(user_id) => Some(user_id),
            Err(_) => {
                tracing::warn!(session_id, "session holds a malformed user id");
                None
            }
        }))
    }
}
