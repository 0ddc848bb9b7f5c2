// src/application/commands/articles/vote.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct VoteOnArticleCommand {
    pub article_id: String,
    /// `None` when the field was absent; `Some(0)` is a valid no-op vote.
    pub inc_votes: Option<i32>,
}

impl ArticleCommandService {
    pub async fn vote_on_article(&self, command: VoteOnArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.article_id)?;
        let delta = command.inc_votes.ok_or(ApplicationError::MissingField)?;

        let article = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or(ApplicationError::ArticleNotFound)?;

        tracing::info!(article_id = %id, delta, votes = article.votes, "article votes updated");
        Ok(article.into())
    }
}
