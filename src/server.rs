//! HTTP server initialization and runtime setup.
//!
//! Builds the link store, the GraphQL schema and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, MongoLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (MongoDB client or in-memory)
/// - GraphQL schema
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The MongoDB connection string is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_repository = build_repository(&config).await?;

    let state = AppState::new(link_repository);
    let app = app_router(state, config.graphiql);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}/graphql");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Constructs the configured link store once for the whole process.
///
/// An unreachable MongoDB server is logged but not fatal; requests fail with
/// a connectivity error until it comes up.
async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.store_backend {
        StoreBackend::Mongo => {
            let repository = MongoLinkRepository::connect(config)
                .await
                .context("Failed to configure MongoDB client")?;

            match repository.health_check().await {
                Ok(()) => tracing::info!(
                    "Connected to MongoDB, collection '{}'",
                    repository.collection_name()
                ),
                Err(e) => tracing::warn!("MongoDB not reachable at startup: {}", e),
            }

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory link store; data is lost on exit");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
