use crate::core::platform::container::notification::Notification;
use crate::core::platform::manager::notification_service::NotificationService;
use crate::error::AppResult;
use crate::infrastructure::web::ResourceId;
use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

async fn list_notifications(State(service): State<Arc<NotificationService>>) -> AppResult<Json<Vec<Notification>>> {
    Ok(Json(service.list().await?))
}

async fn mark_read(
    State(service): State<Arc<NotificationService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Notification>> {
    Ok(Json(service.mark_read(id).await?))
}

async fn mark_all_read(State(service): State<Arc<NotificationService>>) -> AppResult<Json<Value>> {
    let updated = service.mark_all_read().await?;
    Ok(Json(json!({ "success": true, "updated": updated })))
}

async fn delete_notification(
    State(service): State<Arc<NotificationService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    service.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

async fn send_test_notification(State(service): State<Arc<NotificationService>>) -> AppResult<Json<Value>> {
    let notification = service.send_test().await?;
    Ok(Json(json!({
        "message": "Test notification created",
        "notification": notification,
    })))
}

pub fn create_notification_routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", put(mark_all_read))
        .route("/notifications/:id/read", put(mark_read))
        .route("/notifications/:id", delete(delete_notification))
        .route("/test-notification", post(send_test_notification))
        .with_state(service)
}
