/*
Entity API Tests

CRUD behavior shared by vendors, products, assets and users, driven through the
full router against an in-memory database.
*/

use crate::common::{id_of, titles, TestApp};
use assetto::application::ports::output::activity_log_port::ActivityLogPort;
use assetto::application::ports::output::notification_port::NotificationPort;
use assetto::core::platform::container::activity_log::ActivityLogEntry;
use assetto::core::platform::container::notification::Notification;
use assetto::core::platform::container::vendor::Vendor;
use assetto::core::platform::manager::credentials::CredentialHasher;
use assetto::core::platform::manager::crud_service::CrudService;
use assetto::core::platform::manager::side_effects::SideEffectEmitter;
use assetto::error::{AppError, AppResult};
use assetto::infrastructure::repositories::sqlite_database::Database;
use assetto::infrastructure::repositories::sqlite_entity_repository::SqliteEntityRepository;
use assetto::infrastructure::repositories::sqlite_recycle_bin_repository::SqliteRecycleBinRepository;
use assetto::infrastructure::web::entity_controller::create_entity_routes;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

fn sample_payloads() -> Vec<(&'static str, Value)> {
    vec![
        ("vendors", json!({"name": "Acme", "email": "sales@acme.io", "phone": "555-0100", "company": "Acme Inc"})),
        ("products", json!({"name": "Standing Desk", "category": "Furniture", "price": 499.0, "vendor": "Acme", "quantity": 12})),
        ("assets", json!({"name": "Laptop 42", "type": "Laptop", "assignedTo": "Dana", "status": "active", "purchaseDate": "2024-03-01"})),
        ("users", json!({"username": "dana", "email": "dana@example.com", "role": "admin", "password": "hunter2"})),
    ]
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn test_create_then_get_for_every_kind() {
    let app = TestApp::new().await;

    for (collection, payload) in sample_payloads() {
        let (status, created) = app.post(&format!("/api/{}", collection), payload.clone()).await;
        assert_eq!(status, StatusCode::CREATED, "{}: {}", collection, created);
        assert!(created["createdAt"].is_string());
        assert!(created["updatedAt"].is_string());

        let id = id_of(&created);
        let (status, fetched) = app.get(&format!("/api/{}/{}", collection, id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (_, listed) = app.get(&format!("/api/{}", collection)).await;
        assert_eq!(listed, json!([created]));
    }
}

#[tokio::test]
async fn test_created_record_echoes_payload_fields() {
    let app = TestApp::new().await;
    let (_, created) = app
        .post("/api/products", json!({"name": "Chair", "price": 80.5, "quantity": 3}))
        .await;

    assert_eq!(created["name"], "Chair");
    assert_eq!(created["price"], 80.5);
    assert_eq!(created["quantity"], 3);
}

#[tokio::test]
async fn test_list_is_oldest_first() {
    let app = TestApp::new().await;
    for name in ["first", "second", "third"] {
        app.create("vendors", json!({ "name": name })).await;
    }

    let (_, listed) = app.get("/api/vendors").await;
    let names: Vec<&str> = listed.as_array().unwrap().iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let (status, body) = app.get(&format!("/api/vendors/{}", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vendor not found");

    let (status, _) = app.put(&format!("/api/assets/{}", missing), json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/vendors/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_validation_errors_are_bad_requests() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/vendors", json!({"email": "a@b.co"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, _) = app.post("/api/vendors", json!({"name": "Bad mail", "email": "nope"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/products", json!({"name": "Free money", "price": -1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/assets", json!({"name": "Old", "purchaseDate": "yesterday"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = app.get("/api/vendors").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new().await;
    let (status, body) = app.send_raw(axum::http::Method::POST, "/api/vendors", "{\"name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_merges_partial_payload() {
    let app = TestApp::new().await;
    let (_, created) = app
        .post("/api/assets", json!({"name": "Monitor", "type": "Display", "status": "in-stock"}))
        .await;
    let id = id_of(&created);

    let (status, updated) = app
        .put(&format!("/api/assets/{}", id), json!({"status": "assigned", "assignedTo": "Lee", "id": Uuid::new_v4()}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["type"], "Display");
    assert_eq!(updated["status"], "assigned");
    assert_eq!(updated["assignedTo"], "Lee");

    let (status, _) = app.put(&format!("/api/assets/{}", id), json!({"name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_moves_record_to_recycle_bin() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/products", json!({"name": "Lamp", "price": 19.99})).await;
    let id = id_of(&created);

    let (status, body) = app.delete(&format!("/api/products/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, bin) = app.get("/api/recycle-bin").await;
    let entries = bin.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["entityType"], "Product");
    assert_eq!(entries[0]["data"], created);
    assert!(entries[0]["deletedAt"].is_string());
}

#[tokio::test]
async fn test_delete_missing_record_creates_no_bin_entry() {
    let app = TestApp::new().await;
    let (status, _) = app.delete(&format!("/api/vendors/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin, json!([]));
}

#[tokio::test]
async fn test_each_mutation_emits_one_notification_and_one_activity() {
    let app = TestApp::new().await;
    let id = app.create("vendors", json!({"name": "Initech"})).await;
    app.put(&format!("/api/vendors/{}", id), json!({"phone": "555"})).await;
    app.delete(&format!("/api/vendors/{}", id)).await;

    let (_, notifications) = app.get("/api/notifications").await;
    assert_eq!(titles(&notifications), vec!["Vendor Deleted", "Vendor Updated", "Vendor Added"]);
    assert_eq!(notifications[0]["type"], "warning");
    assert_eq!(notifications[1]["type"], "info");
    assert_eq!(notifications[2]["type"], "success");

    let (_, activity) = app.get("/api/activity").await;
    let actions: Vec<&str> = activity.as_array().unwrap().iter().map(|a| a["action"].as_str().unwrap()).collect();
    assert_eq!(actions, vec!["DELETE", "UPDATE", "CREATE"]);
    assert_eq!(activity[0]["user"], "System");
}

#[tokio::test]
async fn test_user_password_never_leaves_the_server() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/users", json!({"username": "lee", "password": "s3cret"})).await;
    assert!(created.get("password").is_none());
    assert_eq!(created["role"], "user");

    let id = id_of(&created);
    let (_, fetched) = app.get(&format!("/api/users/{}", id)).await;
    assert!(fetched.get("password").is_none());

    let (_, updated) = app.put(&format!("/api/users/{}", id), json!({"password": "changed"})).await;
    assert!(updated.get("password").is_none());

    let (_, listed) = app.get("/api/users").await;
    assert!(listed[0].get("password").is_none());

    // The new password is the one that works
    let (status, _) = app.post("/api/auth/login", json!({"username": "lee", "password": "changed"})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = TestApp::new().await;
    app.create("users", json!({"username": "sam", "password": "pw"})).await;

    let (status, body) = app.post("/api/users", json!({"username": "sam", "password": "pw2"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("sam"));
}

#[tokio::test]
async fn test_padded_username_is_stored_trimmed() {
    let app = TestApp::new().await;
    let (status, created) = app.post("/api/users", json!({"username": " bob ", "password": "pw"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "bob");

    // Both spellings name the same account
    let (status, body) = app.post("/api/users", json!({"username": "bob", "password": "pw2"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    let (status, body) = app.post("/api/auth/register", json!({"username": "bob ", "password": "pw3"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");

    let (status, login) = app.post("/api/auth/login", json!({"username": " bob", "password": "pw"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["user"]["username"], "bob");

    let (_, users) = app.get("/api/users").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_plain_purchase_date_comes_back_as_utc_midnight() {
    let app = TestApp::new().await;
    let (status, created) = app
        .post("/api/assets", json!({"name": "Scanner", "purchaseDate": "2024-01-05"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["purchaseDate"], "2024-01-05T00:00:00Z");

    let (_, fetched) = app.get(&format!("/api/assets/{}", id_of(&created))).await;
    assert_eq!(fetched["purchaseDate"], "2024-01-05T00:00:00Z");
}

/// Notification and activity stores that are always down
#[derive(Default)]
struct UnavailableStores {
    notification_writes: AtomicUsize,
    activity_writes: AtomicUsize,
}

#[async_trait]
impl NotificationPort for UnavailableStores {
    async fn insert(&self, _notification: &Notification) -> AppResult<()> {
        self.notification_writes.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Internal("notifications unavailable".into()))
    }
    async fn list(&self) -> AppResult<Vec<Notification>> {
        Err(AppError::Internal("notifications unavailable".into()))
    }
    async fn mark_read(&self, _id: Uuid) -> AppResult<Option<Notification>> {
        Err(AppError::Internal("notifications unavailable".into()))
    }
    async fn mark_all_read(&self) -> AppResult<u64> {
        Err(AppError::Internal("notifications unavailable".into()))
    }
    async fn delete(&self, _id: Uuid) -> AppResult<bool> {
        Err(AppError::Internal("notifications unavailable".into()))
    }
}

#[async_trait]
impl ActivityLogPort for UnavailableStores {
    async fn append(&self, _entry: &ActivityLogEntry) -> AppResult<()> {
        self.activity_writes.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Internal("activity log unavailable".into()))
    }
    async fn list(&self) -> AppResult<Vec<ActivityLogEntry>> {
        Err(AppError::Internal("activity log unavailable".into()))
    }
}

#[tokio::test]
async fn test_mutations_succeed_when_side_effect_stores_fail() {
    let database = Database::in_memory().await.unwrap();
    let stores = Arc::new(UnavailableStores::default());
    let effects = Arc::new(SideEffectEmitter::new(stores.clone(), stores.clone(), "System"));
    let vendors: Arc<CrudService<Vendor>> = Arc::new(CrudService::new(
        Arc::new(SqliteEntityRepository::new(database.pool().clone())),
        Arc::new(SqliteRecycleBinRepository::new(database.pool().clone())),
        effects,
        CredentialHasher::new(),
    ));
    let app = TestApp::with_router(Router::new().nest("/api", create_entity_routes(vendors)));

    let id = app.create("vendors", json!({"name": "Resilient Co"})).await;
    let (status, _) = app.put(&format!("/api/vendors/{}", id), json!({"company": "Resilient"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&format!("/api/vendors/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(stores.notification_writes.load(Ordering::SeqCst), 3);
    assert_eq!(stores.activity_writes.load(Ordering::SeqCst), 3);
}
