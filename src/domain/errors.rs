// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Parent row named by a write that turned out not to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Article,
    Author,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Author => f.write_str("author"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("malformed id: {0}")]
    MalformedId(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("referenced {0} does not exist")]
    MissingReference(Reference),
    #[error("persistence error: {0}")]
    Persistence(String),
}
