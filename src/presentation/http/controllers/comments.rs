// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields other than `username` and `body` are accepted and ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comment: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "Comments on the article, newest first.", body = CommentListResponse),
        (status = 400, description = "Malformed article id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<CommentListResponse>> {
    let comment = state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(CommentListResponse { comment }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Numeric article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "The created comment.", body = CommentResponse),
        (status = 400, description = "Missing field or malformed article id.", body = ErrorResponse),
        (status = 404, description = "Unknown user or article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = CreateCommentCommand {
        article_id,
        username: payload.username,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Numeric comment id")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 400, description = "Malformed comment id.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
