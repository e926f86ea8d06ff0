// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use scribe_core::application::ports::{
    time::Clock,
    util::{IdGenerator, SlugGenerator},
};
use scribe_core::domain::{article::ArticleId, errors::DomainResult};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lowercases and joins words with hyphens. Enough for test titles.
#[derive(Clone)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect::<String>()
                    .to_ascii_lowercase()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Hands out `ff00...0001`, `ff00...0002`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_article_id(&self) -> DomainResult<ArticleId> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ArticleId::new(format!("ff{n:022x}"))
    }
}
