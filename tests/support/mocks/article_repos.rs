// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scribe_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use scribe_core::domain::errors::{DomainError, DomainResult};
use scribe_core::domain::user::UserId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Article store backed by a `Vec`, implementing both repository traits.
///
/// Counts reads and mutations so tests can assert that a rejected operation
/// never reached the store, or never wrote to it.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    reads: AtomicUsize,
    mutations: AtomicUsize,
    fail_reads: AtomicBool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let store = Self::new();
        store.articles.lock().unwrap().extend(articles);
        store
    }

    pub fn seed(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id.as_str() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Makes every subsequent read fail as if the database were down.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    fn read<T>(&self, f: impl FnOnce(&[Article]) -> T) -> DomainResult<T> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(f(&self.articles.lock().unwrap()))
    }

    fn mutate<T>(
        &self,
        id: &ArticleId,
        f: impl FnOnce(&mut Article) -> T,
    ) -> DomainResult<T> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| &article.id == id)
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;
        Ok(f(article))
    }

    fn bookmarks_of(&self, user_id: &UserId) -> Vec<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.is_bookmarked_by(user_id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.read(|articles| articles.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.read(|articles| articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn find_by_filter(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        self.read(|articles| {
            articles
                .iter()
                .filter(|article| filter.matches(article))
                .cloned()
                .collect()
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        if articles
            .iter()
            .any(|existing| existing.id == article.id || existing.slug == article.slug)
        {
            return Err(DomainError::Conflict("article already exists".into()));
        }
        let article = Article::from(article);
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let id = update.id.clone();
        self.mutate(&id, |article| {
            article.apply(update);
            article.clone()
        })
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| &article.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        Ok(())
    }

    async fn add_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article> {
        self.mutate(id, |article| {
            article.likes.insert(user_id.clone());
            article.clone()
        })
    }

    async fn remove_like(&self, id: &ArticleId, user_id: &UserId) -> DomainResult<Article> {
        self.mutate(id, |article| {
            article.likes.remove(user_id);
            article.clone()
        })
    }

    async fn set_published(
        &self,
        id: &ArticleId,
        published: bool,
        at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        self.mutate(id, |article| {
            if published {
                article.publish(at);
            } else {
                article.unpublish(at);
            }
            article.clone()
        })
    }

    async fn insert_in_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>> {
        self.mutate(id, |article| {
            article.bookmarked_by.insert(user_id.clone());
        })?;
        Ok(self.bookmarks_of(user_id))
    }

    async fn remove_from_bookmarks(
        &self,
        id: &ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Vec<Article>> {
        self.mutate(id, |article| {
            article.bookmarked_by.remove(user_id);
        })?;
        Ok(self.bookmarks_of(user_id))
    }
}
