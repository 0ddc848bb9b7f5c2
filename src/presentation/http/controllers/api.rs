// src/presentation/http/controllers/api.rs
use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

/// Static description of every endpoint, served verbatim by `GET /api`.
pub const ENDPOINTS_MANIFEST: &str = include_str!("../../../../endpoints.json");

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Description of every available endpoint.", content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn get_endpoints() -> Response {
    ([(CONTENT_TYPE, "application/json")], ENDPOINTS_MANIFEST).into_response()
}
