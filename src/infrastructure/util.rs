// src/infrastructure/util.rs
use crate::application::ports::util::{IdGenerator, SlugGenerator};
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use chrono::Utc;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Produces 24-hex identifiers laid out like document-store object ids: a
/// 4-byte big-endian creation timestamp followed by 8 random bytes.
#[derive(Default, Clone)]
pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn next_article_id(&self) -> DomainResult<ArticleId> {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let random = uuid::Uuid::new_v4();

        let hex: String = seconds
            .to_be_bytes()
            .iter()
            .chain(&random.as_bytes()[..8])
            .map(|byte| format!("{byte:02x}"))
            .collect();
        ArticleId::new(hex)
    }
}
