/*
Service Registry

Builds every service once at startup and hands out shared handles. The web layer
only ever sees this struct; the repositories behind it are wired here.
*/

use crate::core::platform::container::asset::Asset;
use crate::core::platform::container::product::Product;
use crate::core::platform::container::user::User;
use crate::core::platform::container::vendor::Vendor;
use crate::core::platform::manager::activity_log_service::ActivityLogService;
use crate::core::platform::manager::auth_service::AuthService;
use crate::core::platform::manager::credentials::CredentialHasher;
use crate::core::platform::manager::crud_service::CrudService;
use crate::core::platform::manager::notification_service::NotificationService;
use crate::core::platform::manager::recycle_bin_service::RecycleBinService;
use crate::core::platform::manager::side_effects::SideEffectEmitter;
use crate::core::platform::manager::support_service::SupportService;
use crate::infrastructure::repositories::sqlite_activity_log_repository::SqliteActivityLogRepository;
use crate::infrastructure::repositories::sqlite_database::Database;
use crate::infrastructure::repositories::sqlite_entity_repository::SqliteEntityRepository;
use crate::infrastructure::repositories::sqlite_notification_repository::SqliteNotificationRepository;
use crate::infrastructure::repositories::sqlite_recycle_bin_repository::SqliteRecycleBinRepository;
use crate::infrastructure::repositories::sqlite_support_repository::SqliteSupportRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceRegistry {
    pub vendors: Arc<CrudService<Vendor>>,
    pub products: Arc<CrudService<Product>>,
    pub assets: Arc<CrudService<Asset>>,
    pub users: Arc<CrudService<User>>,
    pub recycle_bin: Arc<RecycleBinService>,
    pub notifications: Arc<NotificationService>,
    pub activity: Arc<ActivityLogService>,
    pub support: Arc<SupportService>,
    pub auth: Arc<AuthService>,
}

impl ServiceRegistry {
    /// Wire every service against one SQLite database
    pub fn sqlite(database: &Database, default_actor: &str) -> Self {
        let pool = database.pool().clone();
        let store = Arc::new(SqliteEntityRepository::new(pool.clone()));
        let bin = Arc::new(SqliteRecycleBinRepository::new(pool.clone()));
        let notifications = Arc::new(SqliteNotificationRepository::new(pool.clone()));
        let activity = Arc::new(SqliteActivityLogRepository::new(pool.clone()));
        let tickets = Arc::new(SqliteSupportRepository::new(pool));

        let effects = Arc::new(SideEffectEmitter::new(
            notifications.clone(),
            activity.clone(),
            default_actor,
        ));
        let hasher = CredentialHasher::new();

        Self {
            vendors: Arc::new(CrudService::new(store.clone(), bin.clone(), effects.clone(), hasher.clone())),
            products: Arc::new(CrudService::new(store.clone(), bin.clone(), effects.clone(), hasher.clone())),
            assets: Arc::new(CrudService::new(store.clone(), bin.clone(), effects.clone(), hasher.clone())),
            users: Arc::new(CrudService::new(store.clone(), bin.clone(), effects.clone(), hasher.clone())),
            recycle_bin: Arc::new(RecycleBinService::new(bin, store.clone(), effects.clone())),
            notifications: Arc::new(NotificationService::new(notifications)),
            activity: Arc::new(ActivityLogService::new(activity)),
            support: Arc::new(SupportService::new(tickets, effects.clone())),
            auth: Arc::new(AuthService::new(store, hasher, effects)),
        }
    }
}
