// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure categories surfaced to callers, each with a fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Unauthenticated,
    NotAuthorized,
    NotFound,
    Conflict,
    Infrastructure,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Unauthenticated => 401,
            Self::NotAuthorized => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Infrastructure => 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Store and value-object failures, passed through as raised.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => {
                ErrorKind::InvalidInput
            }
            Self::Domain(DomainError::NotFound(_)) | Self::NotFound(_) => ErrorKind::NotFound,
            Self::Domain(DomainError::Conflict(_)) | Self::Conflict(_) => ErrorKind::Conflict,
            Self::Domain(DomainError::Persistence(_)) | Self::Infrastructure(_) => {
                ErrorKind::Infrastructure
            }
            Self::Unauthorized(_) => ErrorKind::Unauthenticated,
            Self::Forbidden(_) => ErrorKind::NotAuthorized,
        }
    }

    /// The human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Domain(err) => err.message(),
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::Infrastructure(msg) => msg,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
