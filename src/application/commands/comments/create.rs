// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::NewComment,
        errors::{DomainError, Reference},
        user::Username,
    },
};

pub struct CreateCommentCommand {
    pub article_id: String,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CreateCommentCommand {
    pub fn builder() -> CreateCommentCommandBuilder {
        CreateCommentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateCommentCommandBuilder {
    article_id: String,
    username: Option<String>,
    body: Option<String>,
}

impl CreateCommentCommandBuilder {
    pub fn article_id(mut self, article_id: impl Into<String>) -> Self {
        self.article_id = article_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> CreateCommentCommand {
        CreateCommentCommand {
            article_id: self.article_id,
            username: self.username,
            body: self.body,
        }
    }
}

fn required(value: Option<String>) -> ApplicationResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ApplicationError::MissingField)
}

impl CommentCommandService {
    /// Runs the checks in order: required fields, author, article, then
    /// insert. An unknown author is reported even when the article id is
    /// also bad, because the article is only looked at afterwards.
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        if command.article_id.trim().is_empty() {
            return Err(ApplicationError::MissingField);
        }
        let username = required(command.username)?;
        let body = required(command.body)?;

        let author = Username::new(username)?;
        if self.user_repo.find_by_username(&author).await?.is_none() {
            return Err(ApplicationError::UserNotFound);
        }

        let article_id = ArticleId::parse(&command.article_id)?;
        self.guard.ensure_article_exists(article_id).await?;

        let created = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author,
                body,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                // the article or author vanished between the checks and the insert
                DomainError::MissingReference(Reference::Article) => ApplicationError::ArticleNotFound,
                DomainError::MissingReference(Reference::Author) => ApplicationError::UserNotFound,
                other => ApplicationError::from(other),
            })?;

        tracing::info!(
            comment_id = %created.id,
            article_id = %created.article_id,
            author = %created.author,
            "comment created"
        );
        Ok(created.into())
    }
}
