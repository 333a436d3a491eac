//! A minimal web service exposing a welcome message and a PostgreSQL health probe.
//!
//! The database pool is created once at startup and handed to the handlers through
//! [`AppResources`]; every `/health` request borrows one connection from it.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod probe;

#[derive(Clone, Debug)]
pub struct AppResources {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}
