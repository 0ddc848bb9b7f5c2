// src/application/guards.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, ArticleReadRepository},
};
use std::sync::Arc;

/// Existence check run before reads and writes that hang off an article, so a
/// missing parent is reported as 404 instead of an empty result.
pub struct ArticleExistenceGuard {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleExistenceGuard {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn ensure_article_exists(&self, id: ArticleId) -> ApplicationResult<()> {
        match self.read_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::ArticleNotFound),
        }
    }
}
