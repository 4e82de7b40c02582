pub mod activity_log_service;
pub mod auth_service;
pub mod credentials;
pub mod crud_service;
pub mod notification_service;
pub mod recycle_bin_service;
pub mod registry;
pub mod side_effects;
pub mod support_service;
