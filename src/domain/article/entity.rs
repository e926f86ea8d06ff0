// src/domain/article/entity.rs
use crate::domain::article::category::Category;
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub category: Category,
    pub author_id: UserId,
    pub likes: BTreeSet<UserId>,
    pub bookmarked_by: BTreeSet<UserId>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }

    pub fn is_bookmarked_by(&self, user_id: &UserId) -> bool {
        self.bookmarked_by.contains(user_id)
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    /// Applies the provided fields of `update`. Authorship and the like and
    /// bookmark sets are never touched by an edit.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            title,
            slug,
            body,
            category,
            updated_at,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(category) = category {
            self.category = category;
        }
        self.updated_at = updated_at;
    }
}

/// A freshly authored article. New articles start unpublished, with no likes
/// and no bookmarks.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub category: Category,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<NewArticle> for Article {
    fn from(new: NewArticle) -> Self {
        Self {
            id: new.id,
            title: new.title,
            slug: new.slug,
            body: new.body,
            category: new.category,
            author_id: new.author_id,
            likes: BTreeSet::new(),
            bookmarked_by: BTreeSet::new(),
            published: false,
            published_at: None,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub category: Option<Category>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            category: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}
