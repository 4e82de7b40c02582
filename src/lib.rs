// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infrastructure;
pub mod setup;

pub use config::Settings;
pub use error::{AppError, AppResult};
