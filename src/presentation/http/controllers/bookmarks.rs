// src/presentation/http/controllers/bookmarks.rs
use crate::application::{dto::ArticleDto, queries::bookmarks::ListBookmarkedArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Responds with the caller's full bookmark list after the change.
pub async fn add_bookmark(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .bookmark_commands
        .add_bookmark(&user, &id)
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_bookmark(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .bookmark_commands
        .remove_bookmark(&user, &id)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_bookmarked_articles(
    State(state): State<HttpState>,
    Authenticated(_user): Authenticated,
    Path(user_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .bookmark_queries
        .list_bookmarked_articles(ListBookmarkedArticlesQuery { user_id })
        .await
        .into_http()
        .map(Json)
}
