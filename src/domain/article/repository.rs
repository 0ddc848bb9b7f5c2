// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleSummary};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_summaries(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Add `delta` to the vote counter in a single statement. Returns `None`
    /// when no article has the given id.
    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>>;
}
