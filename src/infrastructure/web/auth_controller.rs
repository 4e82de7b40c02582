/*
Auth Controller

Registration and login. Responses only ever carry the public user profile.
*/

use crate::core::platform::container::user::UserProfile;
use crate::core::platform::manager::auth_service::{AuthService, LoginRequest, RegistrationRequest};
use crate::error::AppResult;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Registration response DTO
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Login response DTO
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

/// Register a new user
async fn register_user(
    State(service): State<Arc<AuthService>>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;
    let user = service.register(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// User login
async fn login_user(
    State(service): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(request) = payload?;
    let session = service.login(request).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: session.token,
        user: session.user,
    }))
}

/// Create the auth routes; `/login` is kept for older clients
pub fn create_auth_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
        .route("/login", post(login_user))
        .with_state(service)
}
