/*
Recycle Bin API Tests

Soft delete, restore, purge and the `/api/recyclebin` alias.
*/

use crate::common::{id_of, titles, TestApp};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_restore_returns_record_with_original_id() {
    let app = TestApp::new().await;
    let (_, created) = app
        .post("/api/vendors", json!({"name": "Globex", "company": "Globex Corp"}))
        .await;
    let id = id_of(&created);
    app.delete(&format!("/api/vendors/{}", id)).await;

    let (_, bin) = app.get("/api/recycle-bin").await;
    let entry_id = id_of(&bin[0]);

    let (status, restored) = app.post(&format!("/api/recycle-bin/{}/restore", entry_id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restored, created);

    let (_, vendors) = app.get("/api/vendors").await;
    assert_eq!(vendors, json!([created]));

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin, json!([]));

    let (_, notifications) = app.get("/api/notifications").await;
    assert_eq!(titles(&notifications)[0], "Vendor Restored");
    let (_, activity) = app.get("/api/activity").await;
    assert_eq!(activity[0]["action"], "RESTORE");
}

#[tokio::test]
async fn test_alias_mount_point() {
    let app = TestApp::new().await;
    let id = app.create("assets", json!({"name": "Projector"})).await;
    app.delete(&format!("/api/assets/{}", id)).await;

    let (status, bin) = app.get("/api/recyclebin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bin.as_array().unwrap().len(), 1);

    let entry_id = id_of(&bin[0]);
    let (status, _) = app.post(&format!("/api/recyclebin/{}/restore", entry_id), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/assets/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_permanent_delete_then_restore_is_not_found() {
    let app = TestApp::new().await;
    let id = app.create("products", json!({"name": "Stapler"})).await;
    app.delete(&format!("/api/products/{}", id)).await;

    let (_, bin) = app.get("/api/recycle-bin").await;
    let entry_id = id_of(&bin[0]);

    let (status, body) = app.delete(&format!("/api/recycle-bin/{}", entry_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = app.post(&format!("/api/recycle-bin/{}/restore", entry_id), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/recycle-bin/{}", entry_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_restore_unknown_entry() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(&format!("/api/recycle-bin/{}/restore", Uuid::new_v4()), json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_restore_conflicting_username() {
    let app = TestApp::new().await;
    let id = app.create("users", json!({"username": "pat", "password": "pw"})).await;
    app.delete(&format!("/api/users/{}", id)).await;
    app.create("users", json!({"username": "pat", "password": "other"})).await;

    let (_, bin) = app.get("/api/recycle-bin").await;
    let entry_id = id_of(&bin[0]);

    let (status, _) = app.post(&format!("/api/recycle-bin/{}/restore", entry_id), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_snapshots_are_redacted() {
    let app = TestApp::new().await;
    let id = app.create("users", json!({"username": "kim", "password": "pw"})).await;
    app.delete(&format!("/api/users/{}", id)).await;

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin[0]["entityType"], "User");
    assert_eq!(bin[0]["data"]["username"], "kim");
    assert!(bin[0]["data"].get("password").is_none());

    let entry_id = id_of(&bin[0]);
    let (_, restored) = app.post(&format!("/api/recycle-bin/{}/restore", entry_id), json!({})).await;
    assert!(restored.get("password").is_none());

    // The stored hash survived the round trip
    let (status, _) = app.post("/api/auth/login", json!({"username": "kim", "password": "pw"})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_bin() {
    let app = TestApp::new().await;
    for name in ["a", "b"] {
        let id = app.create("vendors", json!({ "name": name })).await;
        app.delete(&format!("/api/vendors/{}", id)).await;
    }

    let (status, body) = app.delete("/api/recycle-bin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["removed"], 2);

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin, json!([]));

    let (_, notifications) = app.get("/api/notifications").await;
    assert_eq!(titles(&notifications)[0], "Recycle Bin Emptied");
}

#[tokio::test]
async fn test_bin_lists_newest_first() {
    let app = TestApp::new().await;
    for name in ["older", "newer"] {
        let id = app.create("vendors", json!({ "name": name })).await;
        app.delete(&format!("/api/vendors/{}", id)).await;
    }

    let (_, bin) = app.get("/api/recycle-bin").await;
    assert_eq!(bin[0]["data"]["name"], "newer");
    assert_eq!(bin[1]["data"]["name"], "older");
}
