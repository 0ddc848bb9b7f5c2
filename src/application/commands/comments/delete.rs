// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{comment::CommentId, errors::DomainError},
};

pub struct DeleteCommentCommand {
    pub comment_id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::parse(&command.comment_id)?;
        match self.comment_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(comment_id = %id, "comment deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::CommentNotFound),
            Err(other) => Err(ApplicationError::from(other)),
        }
    }
}
