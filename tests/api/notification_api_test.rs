/*
Notification and Activity API Tests
*/

use crate::common::{id_of, TestApp};
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_test_notification_round_trip() {
    let app = TestApp::new().await;
    let (status, body) = app.send(Method::POST, "/api/test-notification", None).await;
    assert_eq!(status, StatusCode::OK);
    let notification = &body["notification"];
    assert_eq!(notification["type"], "info");
    assert_eq!(notification["isRead"], false);

    let id = id_of(notification);
    let (status, read) = app.send(Method::PUT, &format!("/api/notifications/{}/read", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["isRead"], true);

    let (status, _) = app.delete(&format!("/api/notifications/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = app.get("/api/notifications").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_mark_all_read() {
    let app = TestApp::new().await;
    app.create("vendors", json!({"name": "One"})).await;
    app.create("vendors", json!({"name": "Two"})).await;

    let (status, body) = app.send(Method::PUT, "/api/notifications/read-all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 2);

    let (_, listed) = app.get("/api/notifications").await;
    assert!(listed.as_array().unwrap().iter().all(|n| n["isRead"] == true));
}

#[tokio::test]
async fn test_missing_notification() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let (status, _) = app.send(Method::PUT, &format!("/api/notifications/{}/read", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.delete(&format!("/api/notifications/{}", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Notification not found");
}

#[tokio::test]
async fn test_activity_log_is_newest_first() {
    let app = TestApp::new().await;
    app.create("products", json!({"name": "Pen"})).await;
    app.post("/api/support", json!({"name": "Rae", "subject": "Help", "message": "Please"})).await;

    let (status, activity) = app.get("/api/activity").await;
    assert_eq!(status, StatusCode::OK);

    let entries = activity.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["entity"], "Support");
    assert_eq!(entries[0]["user"], "Rae");
    assert_eq!(entries[1]["entity"], "Product");
    assert_eq!(entries[1]["action"], "CREATE");
    assert!(entries[1]["createdAt"].is_string());
}
