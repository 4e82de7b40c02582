// tests/api/common.rs - Shared harness for the HTTP API tests

use assetto::config::application_settings::{LogFormat, LoggingConfig};
use assetto::core::platform::manager::registry::ServiceRegistry;
use assetto::infrastructure::logs::system_log_adapter;
use assetto::infrastructure::repositories::sqlite_database::Database;
use assetto::infrastructure::web::router::create_router;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Once;
use tower::ServiceExt;

static INIT: Once = Once::new();

/// Initialize test environment; set TEST_LOG to see service logs
pub fn init_test_env() {
    INIT.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            let config = LoggingConfig {
                level: "assetto=debug".to_string(),
                format: LogFormat::Text,
            };
            system_log_adapter::init(&config).expect("Failed to initialize test logging");
        }
    });
}

/// Full application router backed by a fresh in-memory database
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        init_test_env();
        let database = Database::in_memory().await.expect("Failed to open in-memory database");
        let services = ServiceRegistry::sqlite(&database, "System");
        Self::with_router(create_router(&services))
    }

    pub fn with_router(router: Router) -> Self {
        Self { router }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        match body {
            Some(json) => self.send_raw(method, uri, &json.to_string()).await,
            None => self.dispatch(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()).await,
        }
    }

    /// Send a body verbatim as `application/json`, valid or not
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a record and return its id, asserting the request succeeded
    pub async fn create(&self, collection: &str, body: Value) -> String {
        let (status, created) = self.post(&format!("/api/{}", collection), body).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", created);
        id_of(&created)
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("response has no id").to_string()
}

pub fn titles(notifications: &Value) -> Vec<String> {
    notifications
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|n| n["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
