//! HTTP surface - router, shared state, and the serve loop.
//!
//! The web layer is a thin shell over [`crate::core`]: each route parses its
//! inputs, calls one core operation, and hands the result to the page
//! renderers in [`pages`]. Uploaded images are served statically from the
//! upload directory under `/uploads`.

/// Route handlers
pub mod handlers;
/// Inline HTML page rendering
pub mod pages;

use crate::{
    config::AppConfig,
    errors::{Error, Result},
};
use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// State shared by every handler.
pub struct AppState {
    /// Connection to the SQLite store
    pub db: DatabaseConnection,
    /// Resolved application configuration
    pub config: AppConfig,
}

/// Builds the application router with every store route wired up.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/product/{id}", get(handlers::product_detail))
        .route("/add_to_cart/{id}", post(handlers::add_to_cart))
        .route("/cart", get(handlers::cart_page))
        .route("/checkout", get(handlers::checkout_page))
        .route("/admin", get(handlers::admin))
        .route("/admin/add", post(handlers::admin_add))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves requests until shutdown.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let address = state.config.bind_address.clone();
    let app = build_router(state);

    let listener = TcpListener::bind(&address).await?;
    info!("Store listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Io)?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
