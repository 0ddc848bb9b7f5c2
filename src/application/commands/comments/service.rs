use std::sync::Arc;

use crate::{
    application::{guards::ArticleExistenceGuard, ports::time::Clock},
    domain::{comment::CommentRepository, user::UserRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) guard: Arc<ArticleExistenceGuard>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        guard: Arc<ArticleExistenceGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            user_repo,
            guard,
            clock,
        }
    }
}
