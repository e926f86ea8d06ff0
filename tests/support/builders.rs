// tests/support/builders.rs
use scribe_core::domain::article::*;
use scribe_core::domain::user::UserId;
use std::collections::BTreeSet;

use super::mocks::fixed_now;

pub const ALICE: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";
pub const BOB: &str = "bbbbbbbbbbbbbbbbbbbbbbbb";
pub const ARTICLE_ID: &str = "5f1d7b3c9e2a4b6d8c0e1f2a";
pub const MISSING_ID: &str = "000000000000000000000000";

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub struct ArticleBuilder {
    id: String,
    title: String,
    slug: String,
    body: String,
    category: String,
    author_id: String,
    likes: Vec<String>,
    bookmarked_by: Vec<String>,
    published: bool,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: ARTICLE_ID.into(),
            title: "Test Article".into(),
            slug: "test-article".into(),
            body: "Test body".into(),
            category: "technology".into(),
            author_id: ALICE.into(),
            likes: Vec::new(),
            bookmarked_by: Vec::new(),
            published: false,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn author(mut self, author_id: &str) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn liked_by(mut self, user_id: &str) -> Self {
        self.likes.push(user_id.into());
        self
    }

    pub fn bookmarked_by(mut self, user_id: &str) -> Self {
        self.bookmarked_by.push(user_id.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Article {
        let to_set = |ids: Vec<String>| ids.iter().map(|id| user(id)).collect::<BTreeSet<_>>();
        let now = fixed_now();
        Article {
            id: ArticleId::new(&self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            category: Category::new(self.category).unwrap(),
            author_id: user(&self.author_id),
            likes: to_set(self.likes),
            bookmarked_by: to_set(self.bookmarked_by),
            published: self.published,
            published_at: self.published.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }
}
