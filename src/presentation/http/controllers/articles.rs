// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, EditArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleBySlugQuery, ListArticlesByCategoryQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
}

pub async fn create_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        category: payload.category,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn get_article_by_slug(
    State(state): State<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_articles_by_category(
    State(state): State<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_by_category(ListArticlesByCategoryQuery { category })
        .await
        .into_http()
        .map(Json)
}

pub async fn edit_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EditArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = EditArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        category: payload.category,
    };

    state
        .services
        .article_commands
        .edit_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .remove_article(&user, &id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn like_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .like_article(&user, &id)
        .await
        .into_http()
        .map(Json)
}

pub async fn unlike_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unlike_article(&user, &id)
        .await
        .into_http()
        .map(Json)
}

pub async fn publish_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish_article(&user, &id)
        .await
        .into_http()
        .map(Json)
}

pub async fn unpublish_article(
    State(state): State<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unpublish_article(&user, &id)
        .await
        .into_http()
        .map(Json)
}
