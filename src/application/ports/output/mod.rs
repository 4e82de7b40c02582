pub mod activity_log_port;
pub mod entity_store_port;
pub mod notification_port;
pub mod recycle_bin_port;
pub mod support_ticket_port;
