use color_eyre::eyre::WrapErr;
use pg_health_service::AppResources;
use pg_health_service::api::start_webserver;
use pg_health_service::config::load_config;
use pg_health_service::db::connect_pool;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_standard_tracing() {
    let default_directives = "pg_health_service=info,tower_http=info,sea_orm=warn,sqlx=warn";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env file is fine; real deployments pass variables directly.
    let _ = dotenvy::dotenv();

    initialize_standard_tracing();

    let config = Arc::new(load_config().wrap_err("Failed to load configuration")?);
    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        user = %config.database.user,
        "connecting to database"
    );

    let db = Arc::new(
        connect_pool(&config.database)
            .await
            .wrap_err("Failed to connect to database")?,
    );

    start_webserver(AppResources { db, config }).await
}
