use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub category: String,
    pub author_id: String,
    pub likes: Vec<String>,
    pub likes_count: usize,
    pub bookmarks_count: usize,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let likes_count = article.likes.len();
        let bookmarks_count = article.bookmarked_by.len();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            category: article.category.into_inner(),
            author_id: article.author_id.into(),
            likes: article.likes.into_iter().map(String::from).collect(),
            likes_count,
            bookmarks_count,
            published: article.published,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
