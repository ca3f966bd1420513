// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use trivia_api::config::Config;
use trivia_api::logging;
use trivia_api::routes;
use trivia_api::state::AppState;
use trivia_api::store::PgStore;
use trivia_api::utils::random::ThreadRandom;

const MAX_CONNECT_RETRIES: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env()?;

    // Initialize Tracing (Logging)
    let _guard = logging::init(&config);

    let pool = connect_with_retry(&config).await?;
    tracing::info!("Database connected...");

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Migrations applied successfully.");

    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        random: Arc::new(ThreadRandom),
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to Postgres, retrying while the database comes up.
async fn connect_with_retry(config: &Config) -> anyhow::Result<PgPool> {
    let mut retry_count = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > MAX_CONNECT_RETRIES {
                    return Err(e).context(format!(
                        "Failed to connect to database after {} retries",
                        MAX_CONNECT_RETRIES
                    ));
                }
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {})",
                    retry_count
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
