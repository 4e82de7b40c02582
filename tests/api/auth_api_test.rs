/*
Auth API Tests
*/

use crate::common::{titles, TestApp};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_hides_password() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({"username": "jo", "email": "jo@example.com", "password": "secret"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "jo");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());

    let (_, users) = app.get("/api/users").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert!(users[0].get("password").is_none());

    let (_, notifications) = app.get("/api/notifications").await;
    assert_eq!(titles(&notifications), vec!["New Registration"]);
    let (_, activity) = app.get("/api/activity").await;
    assert_eq!(activity[0]["action"], "REGISTER");
    assert_eq!(activity[0]["user"], "jo");
}

#[tokio::test]
async fn test_login_flow() {
    let app = TestApp::new().await;
    app.post("/api/auth/register", json!({"username": "jo", "password": "secret"})).await;

    let (status, body) = app.post("/api/auth/login", json!({"username": "jo", "password": "secret"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "jo");

    let (status, _) = app.post("/api/login", json!({"username": "jo", "password": "secret"})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, activity) = app.get("/api/activity").await;
    assert_eq!(activity[0]["action"], "LOGIN");
}

#[tokio::test]
async fn test_bad_credentials_share_one_message() {
    let app = TestApp::new().await;
    app.post("/api/auth/register", json!({"username": "jo", "password": "secret"})).await;

    let (status, wrong_password) = app.post("/api/auth/login", json!({"username": "jo", "password": "nope"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, unknown_user) = app.post("/api/auth/login", json!({"username": "ghost", "password": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password["message"], unknown_user["message"]);
}

#[tokio::test]
async fn test_duplicate_registration() {
    let app = TestApp::new().await;
    let body = json!({"username": "jo", "password": "secret"});
    app.post("/api/auth/register", body.clone()).await;

    let (status, error) = app.post("/api/auth/register", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Username already exists");
}

#[tokio::test]
async fn test_register_requires_password() {
    let app = TestApp::new().await;
    let (status, _) = app.post("/api/auth/register", json!({"username": "jo", "password": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/auth/register", json!({"username": "jo"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
