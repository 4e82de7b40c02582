/*
Entity Controller

REST endpoints shared by every managed entity kind. The routes are generic over the
entity type, so `/api/vendors`, `/api/products`, `/api/assets` and `/api/users` are
all produced by `create_entity_routes`.
*/

use crate::core::base::entity::record::Record;
use crate::core::platform::container::entity::Entity;
use crate::core::platform::manager::crud_service::CrudService;
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

/// Serialize a record for clients with secret fields stripped
fn to_response<T: Entity>(record: &Record<T>) -> AppResult<Value> {
    let mut value = serde_json::to_value(record)?;
    T::redact(&mut value);
    Ok(value)
}

async fn list_entities<T: Entity>(State(service): State<Arc<CrudService<T>>>) -> AppResult<Json<Vec<Value>>> {
    let records = service.list().await?;
    let body = records.iter().map(to_response).collect::<AppResult<Vec<_>>>()?;
    Ok(Json(body))
}

async fn get_entity<T: Entity>(
    State(service): State<Arc<CrudService<T>>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    let record = service.get(id).await?;
    Ok(Json(to_response(&record)?))
}

async fn create_entity<T: Entity>(
    State(service): State<Arc<CrudService<T>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let record = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(to_response(&record)?)))
}

async fn update_entity<T: Entity>(
    State(service): State<Arc<CrudService<T>>>,
    ResourceId(id): ResourceId,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;
    let record = service.update(id, payload).await?;
    Ok(Json(to_response(&record)?))
}

async fn delete_entity<T: Entity>(
    State(service): State<Arc<CrudService<T>>>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Value>> {
    service.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": format!("{} moved to recycle bin", T::KIND),
    })))
}

/// Create the routes for one entity kind, mounted at its collection name
pub fn create_entity_routes<T: Entity>(service: Arc<CrudService<T>>) -> Router {
    let collection = format!("/{}", T::KIND.collection());
    let item = format!("{}/:id", collection);

    Router::new()
        .route(&collection, get(list_entities::<T>).post(create_entity::<T>))
        .route(
            &item,
            get(get_entity::<T>).put(update_entity::<T>).delete(delete_entity::<T>),
        )
        .with_state(service)
}
