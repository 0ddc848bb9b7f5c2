// src/presentation/http/openapi.rs
use axum::Json;
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api::get_endpoints,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::vote_on_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::list_users
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::topics::TopicListResponse,
            crate::presentation::http::controllers::users::UserListResponse,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::articles::VoteRequest,
            crate::presentation::http::controllers::comments::CommentListResponse,
            crate::presentation::http::controllers::comments::CommentResponse,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Topics", description = "Topic listing"),
        (name = "Articles", description = "Article listing, lookup and voting"),
        (name = "Comments", description = "Reading, posting and deleting comments"),
        (name = "Users", description = "User listing"),
        (name = "System", description = "Endpoint discovery")
    ),
    modifiers(&ServerList),
    info(
        title = "NC News API",
        description = "Topics, articles, comments and users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:9090".to_string());

        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
