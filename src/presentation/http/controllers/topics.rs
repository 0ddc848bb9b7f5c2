// src/presentation/http/controllers/topics.rs
use crate::application::dto::TopicDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = TopicListResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(Extension(state): Extension<HttpState>) -> HttpResult<Json<TopicListResponse>> {
    let topics = state.services.topic_queries.list_topics().await.into_http()?;
    Ok(Json(TopicListResponse { topics }))
}
