// src/infrastructure/repositories/error.rs
use crate::domain::errors::{DomainError, Reference};

const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

const CODE_INVALID_TEXT_REPRESENTATION: &str = "22P02";
const CODE_NUMERIC_OUT_OF_RANGE: &str = "22003";
const CODE_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Reclassify driver errors into domain errors. Integer literals the store
/// refuses to parse become [`DomainError::MalformedId`]; unknown failures are
/// kept as [`DomainError::Persistence`] for the caller to log.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_COMMENT_ARTICLE => return DomainError::MissingReference(Reference::Article),
                    CNT_COMMENT_AUTHOR => return DomainError::MissingReference(Reference::Author),
                    _ => {}
                }
            }

            match db_err.code().as_deref() {
                Some(CODE_INVALID_TEXT_REPRESENTATION) => {
                    DomainError::MalformedId(db_err.message().to_string())
                }
                Some(CODE_NUMERIC_OUT_OF_RANGE) => {
                    DomainError::Validation("numeric value out of range".into())
                }
                Some(CODE_FOREIGN_KEY_VIOLATION) => {
                    DomainError::NotFound("referenced record not found".into())
                }
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
