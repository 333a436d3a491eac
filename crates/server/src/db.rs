//! Database connection pool construction.

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Pool options for `url`, sized and timed according to `cfg`.
///
/// The host/credential fields of `cfg` are ignored; only the pool bounds and the
/// acquire timeout are applied.
///
/// sqlx has a single timeout for both waiting on a busy pool and opening a new
/// connection. A refused connection is retried until it expires, so an unreachable
/// server is reported as a pool timeout rather than the driver's refusal.
pub fn pool_options(url: impl Into<String>, cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.min_connections(cfg.min_connections)
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(false);
    opts
}

/// Build the PostgreSQL pool described by `cfg`.
///
/// At least one connection is opened before this returns, so an unreachable or
/// misconfigured server is reported here rather than on the first request.
#[tracing::instrument(skip(cfg), fields(host = %cfg.host, port = cfg.port, db = %cfg.name))]
pub async fn connect_pool(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(pool_options(cfg.connection_url(), cfg)).await?;
    tracing::info!(
        min_connections = cfg.min_connections,
        max_connections = cfg.max_connections,
        acquire_timeout_secs = cfg.acquire_timeout_secs,
        "database pool ready"
    );
    Ok(db)
}
