use axum::{middleware, routing::get, Router};
use configuration::Settings;
use database::{DatabaseOptions, DbRepository, RateRepository};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod timing;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn RateRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RateRepository>) -> Self {
        Self { repository }
    }
}

/// Builds the application router.
///
/// `debug` adds a middleware that logs the response time of every request.
pub fn create_router(state: AppState, debug: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/rates", get(handlers::get_rates))
        .with_state(Arc::new(state));

    if debug {
        tracing::debug!("Request timing middleware enabled in debug mode.");
        app = app.layer(middleware::from_fn(timing::log_response_time));
    }

    app.layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects to the database and serves the API until a shutdown signal arrives.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let pool = database::connect(&DatabaseOptions {
        url: settings.database_url(),
        max_connections: settings.db_max_connections,
        acquire_timeout: Duration::from_secs(settings.db_acquire_timeout_secs),
    })
    .await?;
    let db_repo = DbRepository::new(pool);

    let app = create_router(AppState::new(Arc::new(db_repo.clone())), settings.debug);

    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    tracing::info!("Rate calculator listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_repo.close().await;
    tracing::info!("Database pool closed.");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received.");
}
