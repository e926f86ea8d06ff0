use crate::domain::article::category::Category;
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Conjunctive article filter; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub category: Option<Category>,
    pub bookmarked_by: Option<UserId>,
    pub published: Option<bool>,
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_bookmarked_by(mut self, user_id: UserId) -> Self {
        self.bookmarked_by = Some(user_id);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| &article.category == category)
            && self
                .bookmarked_by
                .as_ref()
                .is_none_or(|user| article.is_bookmarked_by(user))
            && self
                .published
                .is_none_or(|published| article.published == published)
    }
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_filter(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}

/// Mutation side of the article store.
///
/// Like and bookmark writes have set semantics: adding an id that is already
/// present, or removing one that is absent, leaves the set unchanged.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;

    async fn add_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article>;
    async fn remove_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article>;

    /// Sets the publish flag. `at` becomes `updated_at`, and `published_at`
    /// when publishing.
    async fn set_published(
        &self,
        id: &ArticleId,
        published: bool,
        at: DateTime<Utc>,
    ) -> DomainResult<Article>;

    /// Returns every article the user has bookmarked after the insert.
    async fn insert_in_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>>;

    /// Returns every article the user still has bookmarked after the removal.
    async fn remove_from_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>>;
}
