// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides health and readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Health check routes for service monitoring
//!
//! The health endpoint reports which AI provider the service was configured
//! with so a deployment can be verified without generating a plan.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::context::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    /// Report liveness and the configured AI provider
    async fn health_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "aiProvider": resources.config.ai_provider.as_str(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Report readiness to accept requests
    async fn ready_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
