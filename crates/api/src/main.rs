use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projecthub_api::config::{ServerConfig, StoreBackend};
use projecthub_api::router::build_app_router;
use projecthub_api::state::AppState;
use projecthub_db::store::{InMemoryProjectStore, PgProjectStore, ProjectStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "projecthub_api=debug,projecthub_db=debug,tower_http=debug".into()),
    );
    // LOG_FORMAT=json switches to one JSON object per line.
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.store_backend,
        restrict_project_edits = config.restrict_project_edits,
        "Loaded server configuration",
    );

    // --- Store ---
    let store = build_store(&config).await;

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

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

/// Construct the configured [`ProjectStore`] adapter.
///
/// The postgres pool connects lazily, so an unreachable database at startup
/// only logs a warning; requests fail with 500 until it comes back.
async fn build_store(config: &ServerConfig) -> Arc<dyn ProjectStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory project store; data is lost on restart");
            Arc::new(InMemoryProjectStore::new())
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set");

            let pool = projecthub_db::create_pool(database_url, config.db_max_connections)
                .expect("Invalid DATABASE_URL");
            tracing::info!("Database connection pool created");

            match projecthub_db::health_check(&pool).await {
                Ok(()) => {
                    tracing::info!("Database health check passed");
                    projecthub_db::run_migrations(&pool)
                        .await
                        .expect("Failed to run database migrations");
                    tracing::info!("Database migrations applied");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Database unreachable at startup, migrations skipped");
                }
            }

            Arc::new(PgProjectStore::new(pool))
        }
    }
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
