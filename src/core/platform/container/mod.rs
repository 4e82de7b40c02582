pub mod activity_log;
pub mod asset;
pub mod email;
pub mod entity;
pub mod notification;
pub mod product;
pub mod recycle_bin;
pub mod support_ticket;
pub mod user;
pub mod vendor;
