pub mod logs;
pub mod repositories;
pub mod web;
