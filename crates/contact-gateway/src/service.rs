//! Contact Gateway service - router assembly and server lifecycle.

use crate::api::{health_check, metrics_snapshot, submit_contact, AppState};
use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::{create_cors_layer, create_panic_layer, ContactMetrics, TracingLayer};
use crate::ports::{SimulatedSink, SubmissionSink};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tracing::info;

/// Contact Gateway service state
pub struct ContactGatewayService {
    config: GatewayConfig,
    sink: Arc<dyn SubmissionSink>,
    metrics: Arc<ContactMetrics>,
    shutdown: Arc<Notify>,
}

impl ContactGatewayService {
    /// Create a new service delivering accepted submissions to `sink`
    pub fn new(config: GatewayConfig, sink: Arc<dyn SubmissionSink>) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            sink,
            metrics: Arc::new(ContactMetrics::new()),
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// Create a service backed by [`SimulatedSink`] using the configured delay
    pub fn with_simulated_sink(config: GatewayConfig) -> Result<Self, GatewayError> {
        let sink = Arc::new(SimulatedSink::new(config.processing.simulated_delay));
        Self::new(config, sink)
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<ContactMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        let state = AppState {
            sink: Arc::clone(&self.sink),
            metrics: Arc::clone(&self.metrics),
        };

        let middleware = ServiceBuilder::new()
            .layer(create_cors_layer(&self.config.cors))
            .layer(create_panic_layer())
            .layer(TracingLayer::new());

        Router::new()
            .route("/api/contact", post(submit_contact))
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_snapshot))
            .layer(DefaultBodyLimit::max(self.config.limits.max_request_size))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address and serve until [`shutdown`](Self::shutdown)
    pub async fn start(&self) -> Result<(), GatewayError> {
        let addr = self.config.http_addr();
        info!(addr = %addr, "Starting HTTP server");
        let listener = TcpListener::bind(addr).await.map_err(GatewayError::Bind)?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener until [`shutdown`](Self::shutdown)
    pub async fn serve(&self, listener: TcpListener) -> Result<(), GatewayError> {
        let addr = listener.local_addr().map_err(GatewayError::Bind)?;
        info!(addr = %addr, "Contact gateway listening");

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
                info!("Received shutdown signal");
            })
            .await
            .map_err(GatewayError::Serve)?;

        info!("Contact gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown. In-flight requests run to completion.
    ///
    /// Safe to call before `serve` starts; the signal is kept until consumed.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}
