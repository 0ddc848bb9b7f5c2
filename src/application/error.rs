// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures returned by the application services. The display strings of the
/// client-facing variants are the messages rendered in response bodies.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("missing required field!")]
    MissingField,

    #[error("{0}")]
    InvalidQuery(String),

    #[error("article not found!")]
    ArticleNotFound,

    #[error("comment not found!")]
    CommentNotFound,

    #[error("user does not exist!")]
    UserNotFound,
}

impl ApplicationError {
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}
