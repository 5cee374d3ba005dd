use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rashguard_api::config::ServerConfig;
use rashguard_api::router::build_app_router;
use rashguard_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rashguard_api=debug,rashguard_db=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let state = AppState::new(connect_database(&config).await, config.clone());
    migrate_if_connected(&state).await;

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect to PostgreSQL.
///
/// An unreachable database does not stop the server: the pool falls back
/// to lazy connection and each storage call fails on its own until the
/// database comes up.
async fn connect_database(config: &ServerConfig) -> rashguard_db::DbPool {
    match rashguard_db::create_pool(&config.database_url, &config.pool).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created");
            pool
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Database unavailable, continuing without a live connection"
            );
            rashguard_db::create_lazy_pool(&config.database_url, &config.pool)
                .expect("DATABASE_URL must be a valid PostgreSQL connection string")
        }
    }
}

/// Apply migrations now if the database is reachable.
///
/// Otherwise the first storage call after the database appears does it.
async fn migrate_if_connected(state: &AppState) {
    if rashguard_db::health_check(&state.pool).await.is_err() {
        tracing::warn!("Deferring database migrations until the database is reachable");
        return;
    }
    state
        .schema
        .ensure(&state.pool)
        .await
        .expect("Failed to run database migrations");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
