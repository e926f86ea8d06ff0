// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, bookmarks};
use crate::presentation::http::middleware::is_authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    let protected = Router::new()
        .route("/api/v1/articles", post(articles::create_article))
        .route(
            "/api/v1/articles/{id}",
            patch(articles::edit_article).delete(articles::remove_article),
        )
        .route(
            "/api/v1/articles/{id}/like",
            post(articles::like_article).delete(articles::unlike_article),
        )
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route(
            "/api/v1/articles/{id}/unpublish",
            post(articles::unpublish_article),
        )
        .route(
            "/api/v1/articles/{id}/bookmark",
            post(bookmarks::add_bookmark).delete(bookmarks::remove_bookmark),
        )
        .route(
            "/api/v1/users/{id}/bookmarks",
            get(bookmarks::list_bookmarked_articles),
        )
        .route_layer(from_fn_with_state(state.clone(), is_authenticated));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/by-category/{category}",
            get(articles::list_articles_by_category),
        )
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Credentialed CORS for the configured origins. A wildcard cannot be combined
/// with credentials, so `*` and malformed entries are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                tracing::warn!("ignoring wildcard CORS origin");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring malformed CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
