// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, Category, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::BTreeSet;

const ARTICLE_COLUMNS: &str = "id, title, slug, body, category, author_id, likes, bookmarked_by, \
     published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    slug: String,
    body: String,
    category: String,
    author_id: String,
    likes: Vec<String>,
    bookmarked_by: Vec<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn user_set(ids: Vec<String>) -> DomainResult<BTreeSet<UserId>> {
    ids.into_iter().map(UserId::new).collect()
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(&row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            category: Category::new(row.category)?,
            author_id: UserId::new(&row.author_id)?,
            likes: user_set(row.likes)?,
            bookmarked_by: user_set(row.bookmarked_by)?,
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

fn article_not_found() -> DomainError {
    DomainError::NotFound("Article not found".into())
}

async fn fetch_filtered(pool: &PgPool, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE TRUE"));

    if let Some(category) = &filter.category {
        builder.push(" AND category = ");
        builder.push_bind(category.as_str().to_owned());
    }

    if let Some(user_id) = &filter.bookmarked_by {
        builder.push(" AND ");
        builder.push_bind(user_id.as_str().to_owned());
        builder.push("::text = ANY(bookmarked_by)");
    }

    if let Some(published) = filter.published {
        builder.push(" AND published = ");
        builder.push_bind(published);
    }

    builder.push(" ORDER BY created_at DESC, id DESC");

    let rows = builder
        .build_query_as::<ArticleRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    into_articles(rows)
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_filter(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        fetch_filtered(&self.pool, filter).await
    }
}

impl PostgresArticleWriteRepository {
    async fn fetch_updated(&self, sql: &str, id: &ArticleId, user_id: &UserId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(sql)
            .bind(id.as_str())
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(article_not_found)?;

        Article::try_from(row)
    }

    async fn bookmarks_of(&self, user_id: &UserId) -> DomainResult<Vec<Article>> {
        let filter = ArticleFilter::new().with_bookmarked_by(user_id.clone());
        fetch_filtered(&self.pool, &filter).await
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            slug,
            body,
            category,
            author_id,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (id, title, slug, body, category, author_id, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, $7)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(body.as_str())
            .bind(category.as_str())
            .bind(author_id.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            body,
            category,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(String::from(id));
        builder.push(format!(" RETURNING {ARTICLE_COLUMNS}"));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(article_not_found)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(article_not_found());
        }
        Ok(())
    }

    async fn add_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article> {
        // The membership test and the append happen under the row lock, so the
        // array never holds the same user twice.
        let sql = format!(
            "UPDATE articles
             SET likes = CASE WHEN $2::text = ANY(likes) THEN likes ELSE array_append(likes, $2::text) END
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        self.fetch_updated(&sql, id, user_id).await
    }

    async fn remove_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET likes = array_remove(likes, $2::text)
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        self.fetch_updated(&sql, id, user_id).await
    }

    async fn set_published(
        &self,
        id: &ArticleId,
        published: bool,
        at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let published_at = published.then_some(at);
        let sql = format!(
            "UPDATE articles SET published = $2, published_at = $3, updated_at = $4
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .bind(published)
            .bind(published_at)
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(article_not_found)?;

        Article::try_from(row)
    }

    async fn insert_in_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>> {
        let result = sqlx::query(
            "UPDATE articles
             SET bookmarked_by = CASE WHEN $2::text = ANY(bookmarked_by) THEN bookmarked_by
                                      ELSE array_append(bookmarked_by, $2::text) END
             WHERE id = $1",
        )
        .bind(id.as_str())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found());
        }

        self.bookmarks_of(user_id).await
    }

    async fn remove_from_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>> {
        let result =
            sqlx::query("UPDATE articles SET bookmarked_by = array_remove(bookmarked_by, $2::text) WHERE id = $1")
                .bind(id.as_str())
                .bind(user_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found());
        }

        self.bookmarks_of(user_id).await
    }
}
