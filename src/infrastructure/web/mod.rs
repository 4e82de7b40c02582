/*
HTTP adapters. Every controller returns `AppResult`, so failures share the
`{"message": ...}` body produced by `AppError`.
*/

pub mod activity_controller;
pub mod auth_controller;
pub mod entity_controller;
pub mod notification_controller;
pub mod recycle_bin_controller;
pub mod router;
pub mod support_controller;

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// `:id` path segment parsed as a UUID; malformed ids are a validation error
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Uuid::parse_str(&raw)
            .map(ResourceId)
            .map_err(|_| AppError::Validation(format!("Invalid id: {}", raw)))
    }
}
