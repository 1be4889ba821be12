use std::sync::Arc;

use muscle_management::adapters::graphql::{build_schema, GraphqlHandlers};
use muscle_management::adapters::http::app_router;
use muscle_management::adapters::postgres::{
    connect, run_migrations, PostgresExerciseRepository, PostgresTrainingSessionRepository,
    PostgresUnitOfWork,
};
use muscle_management::config::{AppConfig, LogFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let pool = connect(&config.database).await?;
    tracing::info!(database = %config.database.display_target(), "Connected to database");
    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let handlers = GraphqlHandlers::new(
        Arc::new(PostgresTrainingSessionRepository::new(pool.clone())),
        Arc::new(PostgresExerciseRepository::new(pool.clone())),
        Arc::new(PostgresUnitOfWork::new(pool)),
        config.exercises.default_order,
    );
    let app = app_router(build_schema(handlers), &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!("muscle-management listening on http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    match config.server.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
