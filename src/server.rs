// ABOUTME: HTTP server assembly and lifecycle for the planforge service
// ABOUTME: Builds the router with tracing and CORS layers and serves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! HTTP server assembly
//!
//! Combines the domain routers, layers request tracing and CORS on top, and
//! runs the server with graceful shutdown on ctrl-c.

use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::context::ServerResources;
use crate::routes::{DietRoutes, HealthRoutes, WorkoutRoutes};

/// Planforge HTTP server
pub struct PlanServer {
    resources: Arc<ServerResources>,
}

impl PlanServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    #[must_use]
    pub fn router(&self) -> axum::Router {
        axum::Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(DietRoutes::routes(self.resources.clone()))
            .merge(WorkoutRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Run the server on the given port until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails.
    pub async fn run(&self, port: u16) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!("HTTP server listening on port {port}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
