// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, Reference};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BAD_REQUEST: &str = "bad request!";
const ROUTE_NOT_FOUND: &str = "not found!";
const INTERNAL_ERROR: &str = "internal server error!";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::MissingField | ApplicationError::InvalidQuery(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ApplicationError::ArticleNotFound
            | ApplicationError::CommentNotFound
            | ApplicationError::UserNotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::MalformedId(_) | DomainError::Validation(_) => Self::bad_request(),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::MissingReference(Reference::Article) => {
                Self::from_error(ApplicationError::ArticleNotFound)
            }
            DomainError::MissingReference(Reference::Author) => {
                Self::from_error(ApplicationError::UserNotFound)
            }
            DomainError::Persistence(detail) => Self::internal(&detail),
        }
    }

    /// Unparseable ids, bodies and query strings.
    #[must_use]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, BAD_REQUEST.into())
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND.into())
    }

    fn internal(detail: &str) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { msg: self.message })).into_response()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
