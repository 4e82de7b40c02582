pub mod http_server;

use crate::config::Settings;
use crate::core::platform::manager::registry::ServiceRegistry;
use crate::error::AppError;
use crate::infrastructure::repositories::sqlite_database::Database;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Database setup failed: {0}")]
    Database(#[from] AppError),

    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}

/// Connect, wire the services and serve until a shutdown signal arrives
pub async fn setup_and_run(settings: Settings) -> Result<(), SetupError> {
    let database = Database::connect(&settings.database).await?;
    let services = ServiceRegistry::sqlite(&database, &settings.activity.default_actor);

    http_server::run_http_server(&settings.server, &services).await?;
    database.pool().close().await;
    Ok(())
}

/// Create or update the schema and exit
pub async fn migrate(settings: &Settings) -> Result<(), SetupError> {
    let database = Database::connect(&settings.database).await?;
    tracing::info!(url = %settings.database.url, "database schema is up to date");
    database.pool().close().await;
    Ok(())
}
