//! Load generator for the welcome and health endpoints.
//!
//! Run against a live instance, e.g. `loadtest --host http://localhost:5000 --users 50`.
//! With more users than the database pool allows, `/health` latency should grow while
//! requests keep succeeding.

use goose::prelude::*;

async fn welcome(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/").await?;
    Ok(())
}

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let mut goose_metrics = user.get("/health").await?;

    if let Ok(response) = goose_metrics.response {
        if !response.status().is_success() {
            return user.set_failure(
                "database reported unhealthy",
                &mut goose_metrics.request,
                None,
                None,
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(scenario!("Welcome").register_transaction(transaction!(welcome)))
        .register_scenario(
            scenario!("HealthCheck").register_transaction(transaction!(health_check)),
        )
        .execute()
        .await?;

    Ok(())
}
