use crate::domain::user::UserId;

/// The signed-in user behind a request, as resolved by the session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub session_id: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}
