//! Database liveness probe.

use crate::error::ProbeError;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use std::time::{Duration, Instant};

pub const LIVENESS_QUERY: &str = "SELECT 1";

/// Details of a successful liveness round-trip.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionInfo {
    pub backend: DbBackend,
    pub round_trip: Duration,
}

/// Borrow a pooled connection, run [`LIVENESS_QUERY`] on it and hand it back.
///
/// The connection is held only for the duration of the query and is returned to
/// the pool when the borrow is dropped, on the error path as well. Waits for a
/// free connection while the pool is exhausted, up to the pool's acquire timeout.
pub async fn check_liveness(db: &DatabaseConnection) -> Result<ConnectionInfo, ProbeError> {
    let backend = db.get_database_backend();
    let started = Instant::now();

    db.query_one(Statement::from_string(backend, LIVENESS_QUERY))
        .await?
        .ok_or(ProbeError::EmptyResult)?;

    Ok(ConnectionInfo {
        backend,
        round_trip: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{Database, DbErr, MockDatabase};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn live_database_reports_backend() {
        let db = Database::connect("sqlite::memory:").await.expect("connect");
        let info = check_liveness(&db).await.expect("probe");
        assert_eq!(info.backend, DbBackend::Sqlite);
    }

    #[tokio::test]
    async fn query_error_is_surfaced_verbatim() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset by peer".to_owned())])
            .into_connection();

        let err = check_liveness(&db).await.expect_err("probe should fail");
        assert!(matches!(err, ProbeError::Database(_)));
        assert!(err.to_string().contains("connection reset by peer"));
    }

    #[tokio::test]
    async fn empty_result_is_a_failure() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, sea_orm::Value>>::new()])
            .into_connection();

        let err = check_liveness(&db).await.expect_err("probe should fail");
        assert!(matches!(err, ProbeError::EmptyResult));
    }
}
