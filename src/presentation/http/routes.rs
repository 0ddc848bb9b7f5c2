// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{api, articles, comments, topics, users};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{delete, get},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api", get(api::get_endpoints))
        .route("/api/openapi.json", get(openapi::serve_openapi))
        .route("/api/topics", get(topics::list_topics))
        .route("/api/articles", get(articles::list_articles))
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article).patch(articles::vote_on_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/comments/{comment_id}", delete(comments::delete_comment))
        .route("/api/users", get(users::list_users))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// The router wrapped so `/api/articles/3/` is routed like `/api/articles/3`.
/// Path normalisation has to run before routing, so it wraps the router
/// instead of being one of its layers.
pub fn build_app(state: HttpState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(build_router(state))
}

pub async fn route_not_found() -> HttpError {
    HttpError::route_not_found()
}
