// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::VoteOnArticleCommand,
    dto::{ArticleDto, ArticleSummaryDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Column to sort by: `created_at` (default), `votes` or `comment_count`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    #[serde(default)]
    pub order: Option<String>,
    /// Only list articles with this topic slug.
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// Amount added to the vote count; may be negative.
    #[serde(default)]
    pub inc_votes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Article summaries with comment counts.", body = ArticleListResponse),
        (status = 400, description = "Invalid sort, order or topic.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        topic: params.topic,
        sort_by: params.sort_by,
        order: params.order,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Malformed article id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { article_id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Numeric article id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "The article with its updated vote count.", body = ArticleResponse),
        (status = 400, description = "Malformed id, missing or non-numeric inc_votes.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_on_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    ApiJson(payload): ApiJson<VoteRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = VoteOnArticleCommand {
        article_id,
        inc_votes: payload.inc_votes,
    };

    state
        .services
        .article_commands
        .vote_on_article(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}
