// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

use nc_news::application::ports::time::Clock;
use nc_news::application::services::ApplicationServices;
use nc_news::domain::article::ArticleReadRepository;
use nc_news::presentation::http::routes::build_app;
use nc_news::presentation::http::state::HttpState;

use super::fixtures;
use super::mocks::{FixedClock, InMemoryStore};

/// Instant handed out by the test clock to every new comment.
pub fn frozen_now() -> chrono::DateTime<chrono::Utc> {
    fixtures::at(2024, 3, 15, 12, 30)
}

pub fn build_services(
    store: &Arc<InMemoryStore>,
    article_read: Arc<dyn ArticleReadRepository>,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(frozen_now()));
    ApplicationServices::new(
        article_read,
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        clock,
    )
}

/// A seeded store and the HTTP state wired on top of it.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub state: HttpState,
}

impl TestApp {
    pub fn seeded() -> Self {
        let store = Arc::new(InMemoryStore::seeded());
        let services = build_services(&store, store.clone());
        Self {
            state: HttpState::new(Arc::new(services)),
            store,
        }
    }

    /// Same fixture, but article reads go through `article_read`.
    pub fn with_article_read(article_read: Arc<dyn ArticleReadRepository>) -> Self {
        let store = Arc::new(InMemoryStore::seeded());
        let services = build_services(&store, article_read);
        Self {
            state: HttpState::new(Arc::new(services)),
            store,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, json: Option<Value>) -> (StatusCode, Value) {
        let body = json.map(|v| v.to_string());
        self.send_raw(method, uri, body).await
    }

    /// Sends `body` verbatim with a JSON content type. An empty response
    /// body comes back as `Value::Null`.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(raw) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(raw)
            }
            None => Body::empty(),
        };
        let request = builder.body(body).unwrap();

        let response = build_app(self.state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        if bytes.is_empty() {
            return (status, Value::Null);
        }
        let json = serde_json::from_slice(&bytes).expect("response body should be JSON");
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }
}

pub fn msg(body: &Value) -> &str {
    body["msg"].as_str().unwrap_or_default()
}
