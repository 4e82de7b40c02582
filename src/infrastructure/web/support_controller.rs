use crate::core::platform::container::support_ticket::{NewSupportTicket, SupportTicket, SupportTicketUpdate};
use crate::core::platform::manager::support_service::SupportService;
use crate::error::AppResult;
use crate::infrastructure::web::ResourceId;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

async fn list_tickets(State(service): State<Arc<SupportService>>) -> AppResult<Json<Vec<SupportTicket>>> {
    Ok(Json(service.list().await?))
}

async fn get_ticket(
    State(service): State<Arc<SupportService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<SupportTicket>> {
    Ok(Json(service.get(id).await?))
}

async fn create_ticket(
    State(service): State<Arc<SupportService>>,
    payload: Result<Json<NewSupportTicket>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SupportTicket>)> {
    let Json(submission) = payload?;
    let ticket = service.create(submission).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Status changes, admin replies and descriptive edits all arrive here
async fn update_ticket(
    State(service): State<Arc<SupportService>>,
    ResourceId(id): ResourceId,
    payload: Result<Json<SupportTicketUpdate>, JsonRejection>,
) -> AppResult<Json<SupportTicket>> {
    let Json(update) = payload?;
    Ok(Json(service.update(id, update).await?))
}

async fn delete_ticket(
    State(service): State<Arc<SupportService>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    service.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

pub fn create_support_routes(service: Arc<SupportService>) -> Router {
    Router::new()
        .route("/support", get(list_tickets).post(create_ticket))
        .route(
            "/support/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .with_state(service)
}
