// src/application/queries/comments/mod.rs
use crate::{
    application::{dto::CommentDto, error::ApplicationResult, guards::ArticleExistenceGuard},
    domain::{article::ArticleId, comment::CommentRepository},
};
use std::sync::Arc;

pub struct ListCommentsQuery {
    pub article_id: String,
}

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    guard: Arc<ArticleExistenceGuard>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>, guard: Arc<ArticleExistenceGuard>) -> Self {
        Self {
            comment_repo,
            guard,
        }
    }

    /// Comments for an article, newest first. An existing article without
    /// comments yields an empty list; a missing one is `ArticleNotFound`.
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::parse(&query.article_id)?;
        self.guard.ensure_article_exists(article_id).await?;

        let comments = self.comment_repo.list_by_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
