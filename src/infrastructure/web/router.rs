use crate::core::platform::manager::registry::ServiceRegistry;
use crate::infrastructure::web::{
    activity_controller::create_activity_routes, auth_controller::create_auth_routes,
    entity_controller::create_entity_routes, notification_controller::create_notification_routes,
    recycle_bin_controller::create_recycle_bin_routes, support_controller::create_support_routes,
};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble the full application: `/health` plus every controller under `/api`
pub fn create_router(services: &ServiceRegistry) -> Router {
    let api = Router::new()
        .merge(create_entity_routes(services.vendors.clone()))
        .merge(create_entity_routes(services.products.clone()))
        .merge(create_entity_routes(services.assets.clone()))
        .merge(create_entity_routes(services.users.clone()))
        .merge(create_recycle_bin_routes(services.recycle_bin.clone()))
        .merge(create_notification_routes(services.notifications.clone()))
        .merge(create_activity_routes(services.activity.clone()))
        .merge(create_support_routes(services.support.clone()))
        .merge(create_auth_routes(services.auth.clone()));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
