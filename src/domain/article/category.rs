// src/domain/article/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Wraps a stored category without checking catalog membership. Use
    /// [`CategoryCatalog::resolve`] for caller-supplied values.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("category cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of categories articles may be filed under. Supplied by
/// configuration and injected into the services that validate categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: BTreeSet<String>,
}

impl CategoryCatalog {
    pub fn new<I, S>(categories: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: BTreeSet<String> = categories
            .into_iter()
            .map(Into::into)
            .filter(|value| !value.trim().is_empty())
            .collect();

        if categories.is_empty() {
            return Err(DomainError::Validation(
                "category catalog cannot be empty".into(),
            ));
        }

        Ok(Self { categories })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.categories.contains(value)
    }

    pub fn resolve(&self, value: &str) -> DomainResult<Category> {
        if self.contains(value) {
            Category::new(value)
        } else {
            Err(DomainError::Validation("Unknown category".into()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}
