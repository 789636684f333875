use sqlx::postgres::PgPoolOptions;
use std::process::ExitCode;

use gamehive_api::api::{build_router, AppState};
use gamehive_api::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(environment = ?config.environment, "Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        return ExitCode::FAILURE;
    }
    tracing::info!("Database connected successfully");

    let app = build_router(AppState::postgres(pool));

    // Start server
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Server listening on {}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
