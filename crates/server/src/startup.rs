use std::sync::Arc;

use configs::{AppConfig, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use service::product::{ProductRepository, ProductService, SeaOrmProductRepository};

/// Shared handler state. Cloned per request; holds only `Arc` handles.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { products: Arc::new(ProductService::new(repo)) }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Composition root: connect, make sure the table exists, then wire
/// repository -> service -> state.
pub async fn build_state(cfg: &DatabaseConfig) -> Result<ServerState, StartupError> {
    cfg.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let repo = Arc::new(SeaOrmProductRepository::new(db));
    Ok(ServerState::new(repo))
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
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
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until a shutdown signal
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg.database).await?;
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "product catalog listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!("server drained");
    Ok(())
}
