use crate::application::{ApplicationResult, ErrorKind, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.kind() == ErrorKind::Infrastructure {
            tracing::error!(error = %err, "request failed");
            return Self::new(status, "Internal server error".into());
        }

        Self::new(status, err.message().to_string())
    }

    pub(crate) fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            ok: false,
            error: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Unreadable request bodies are invalid input, reported in the usual envelope.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "rejected request body");
        Self::from_error(ApplicationError::validation(rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
