//! Carrel Library Catalog Server
//!
//! A server-rendered catalog application for a small lending library:
//! authors, books, book copies and genres managed through validated HTML
//! forms over a SQLite store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod repository;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<repository::Repository>,
}
