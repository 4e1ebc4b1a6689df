//! Management REST API for Reef.
//!
//! Provides a [`RestServer`] that exposes the cluster's query surface over
//! an axum-based HTTP API. Supported operations:
//!
//! - `GET /v1/peers` — list the current cluster peers
//! - `GET /ping` — liveness probe (204, no body)
//!
//! Every response goes through the shared envelope ([`send_success`] /
//! [`send_error`]): success payloads are JSON with
//! `Content-Type: application/json; charset=UTF-8`, failures are an
//! [`ApiError`](reef_types::ApiError) object. A [`request_context`]
//! middleware attaches a [`RequestLogger`] to each request so failure
//! diagnostics stay correlated by request id.

mod context;
mod envelope;
mod peers;


use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use reef_cluster::PeerDirectory;

pub use context::{RequestLogger, request_context};
pub use envelope::{EnvelopeError, decode_request_body, send_error, send_success};

/// Shared application state for all REST handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    /// The cluster membership view, queried read-only.
    pub directory: Arc<dyn PeerDirectory>,
}

/// Configuration for creating a [`RestServer`].
pub struct RestServerConfig {
    /// The peer directory to answer membership queries from.
    pub directory: Arc<dyn PeerDirectory>,
}

/// Management HTTP server backed by a [`PeerDirectory`].
pub struct RestServer {
    router: Router,
}

impl RestServer {
    /// Create a new REST server with the given configuration.
    pub fn new(config: RestServerConfig) -> Self {
        let state = AppState {
            directory: config.directory,
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum [`Router`] for the management API.
    ///
    /// The [`request_context`] layer wraps every route; handlers rely on it
    /// having run.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/v1/peers", get(peers::list_peers))
            .route("/ping", get(peers::ping))
            .layer(middleware::from_fn(context::request_context))
            .with_state(state)
    }

    /// Return the inner [`Router`] (useful for testing with `tower::ServiceExt`).
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve the management API on the given TCP address.
    pub async fn serve(self, addr: &str) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(addr, "management API listening");
        axum::serve(listener, self.router).await
    }

    /// Serve the management API with graceful shutdown triggered by the
    /// given future.
    ///
    /// When `shutdown` completes, the server stops accepting new
    /// connections and waits for in-flight requests to finish.
    pub async fn serve_with_shutdown(
        self,
        addr: &str,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(addr, "management API listening");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
