// src/domain/comment/mod.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(i32);

impl CommentId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| DomainError::MalformedId(format!("comment id `{raw}` is not an integer")))
    }
}

impl From<CommentId> for i32 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: Username,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// A comment about to be stored. Votes always start at zero.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments for one article, newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Fails with [`DomainError::NotFound`] when nothing was deleted.
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
