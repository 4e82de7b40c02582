pub mod sqlite_activity_log_repository;
pub mod sqlite_database;
pub mod sqlite_entity_repository;
pub mod sqlite_notification_repository;
pub mod sqlite_recycle_bin_repository;
pub mod sqlite_support_repository;
