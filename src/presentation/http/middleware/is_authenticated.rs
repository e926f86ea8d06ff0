// src/presentation/http/middleware/is_authenticated.rs
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Cookie, HeaderMapExt};
use serde_json::json;

/// Lets the request through only when its session cookie resolves to a
/// signed-in user, which is then attached to the request extensions.
///
/// Usage: `axum::middleware::from_fn_with_state(state, is_authenticated)`
pub async fn is_authenticated(
    State(state): State<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    let credential = req
        .headers()
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(&state.session_cookie_name).map(str::to_owned));

    let Some(credential) = credential else {
        return not_authenticated();
    };

    match state.services.session_authenticator().authenticate(&credential).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(None) => {
            tracing::warn!(path = %req.uri().path(), "rejected unauthenticated session");
            not_authenticated()
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

fn not_authenticated() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "ok": false, "error": "Not authenticated" })),
    )
        .into_response()
}
