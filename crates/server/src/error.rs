use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a database liveness probe.
///
/// The `Display` output is the underlying failure text, unmodified, so it can be
/// surfaced to health-check consumers as-is.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Acquiring a pooled connection or running the liveness query failed.
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Liveness query returned no rows")]
    EmptyResult,
}
