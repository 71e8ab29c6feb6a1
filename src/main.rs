//! Cantine server binary.
//!
//! Loads configuration, connects the PostgreSQL pool, optionally runs
//! migrations, wires the PostgreSQL adapters into the application services
//! and serves the HTTP API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cantine::adapters::http::{api_router, MealHandlers, UserHandlers};
use cantine::adapters::postgres::{PostgresMealRepository, PostgresUserRepository};
use cantine::application::{MealRegistry, UserDirectory};
use cantine::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("connected to the meal database");

    if config.database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let registry = Arc::new(MealRegistry::new(Arc::new(PostgresMealRepository::new(
        pool.clone(),
    ))));
    let directory = Arc::new(UserDirectory::new(Arc::new(PostgresUserRepository::new(
        pool,
    ))));

    let app = api_router(MealHandlers::new(registry), UserHandlers::new(directory))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server)?)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "cantine listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, Box<dyn Error>> {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }
    let origins = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
