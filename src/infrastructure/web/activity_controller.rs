use crate::core::platform::container::activity_log::ActivityLogEntry;
use crate::core::platform::manager::activity_log_service::ActivityLogService;
use crate::error::AppResult;
use axum::{extract::State, response::Json, routing::get, Router};
use std::sync::Arc;

async fn list_activity(State(service): State<Arc<ActivityLogService>>) -> AppResult<Json<Vec<ActivityLogEntry>>> {
    Ok(Json(service.list().await?))
}

pub fn create_activity_routes(service: Arc<ActivityLogService>) -> Router {
    Router::new()
        .route("/activity", get(list_activity))
        .with_state(service)
}
