use crate::core::platform::container::recycle_bin::RecycleBinEntry;
use crate::core::platform::manager::recycle_bin_service::RecycleBinService;
use crate::error::AppResult;
use crate::infrastructure::web::ResourceId;
use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Both spellings are served; older clients use `/recyclebin`
const MOUNT_POINTS: [&str; 2] = ["/recycle-bin", "/recyclebin"];

async fn list_entries(State(service): State<Arc<RecycleBinService>>) -> AppResult<Json<Vec<RecycleBinEntry>>> {
    let entries = service.list().await?;
    Ok(Json(entries.iter().map(RecycleBinEntry::redacted).collect()))
}

async fn permanently_delete(
    State(service): State<Arc<RecycleBinService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    service.permanent_delete(id).await?;
    Ok(Json(json!({ "success": true, "message": "Item permanently deleted" })))
}

async fn restore_entry(
    State(service): State<Arc<RecycleBinService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    let mut restored = service.restore(id).await?;
    restored.kind.redact(&mut restored.data);
    Ok(Json(restored.data))
}

async fn empty_bin(State(service): State<Arc<RecycleBinService>>) -> AppResult<Json<Value>> {
    let removed = service.empty().await?;
    Ok(Json(json!({
        "success": true,
        "message": "Recycle bin emptied",
        "removed": removed,
    })))
}

pub fn create_recycle_bin_routes(service: Arc<RecycleBinService>) -> Router {
    MOUNT_POINTS
        .iter()
        .fold(Router::new(), |router, mount| {
            router
                .route(mount, get(list_entries).delete(empty_bin))
                .route(&format!("{}/:id", mount), delete(permanently_delete))
                .route(&format!("{}/:id/restore", mount), post(restore_entry))
        })
        .with_state(service)
}
