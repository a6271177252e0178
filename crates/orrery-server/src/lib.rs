//! Orrery Server - HTTP surface for scientists, planets, and missions
//!
//! A thin axum layer over the store: routing, JSON serialization, and
//! error mapping. See `routes` for the verb/path table.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use orrery_core::{OrreryError, Result};
use state::AppState;

/// Build the application router over the given state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route(
            "/scientists",
            get(routes::list_scientists).post(routes::create_scientist),
        )
        .route(
            "/scientists/:id",
            get(routes::get_scientist)
                .patch(routes::update_scientist)
                .delete(routes::delete_scientist),
        )
        .route("/planets", get(routes::list_planets))
        .route("/missions", post(routes::create_mission))
        .with_state(state)
}

/// Open the datastore and serve until interrupted
pub async fn start_server(config: Config) -> Result<()> {
    info!("Opening datastore at {}", config.database_url);
    let state = AppState::new(&config)?;

    let app = app(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| OrreryError::Internal {
            message: format!("failed to bind {}: {}", address, e),
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| OrreryError::Internal {
            message: format!("server error: {}", e),
        })?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
