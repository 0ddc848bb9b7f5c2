// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i32);

impl ArticleId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a raw path segment. Anything that is not a plain integer is a
    /// malformed id, which callers report separately from "no such article".
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| DomainError::MalformedId(format!("article id `{raw}` is not an integer")))
    }
}

impl From<ArticleId> for i32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
