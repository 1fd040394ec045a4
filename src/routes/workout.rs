// ABOUTME: Workout plan route handlers for generation, fetch, and regeneration
// ABOUTME: Symmetric to the diet surface, without a rescale endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Workout plan routes

use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::context::ServerResources;
use crate::envelope;
use crate::models::{GenerateWorkoutRequest, ModifyWorkoutRequest};
use crate::plans::PlanService;

/// Workout plan routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout", post(Self::handle_generate))
            .route("/api/workout/:id", get(Self::handle_get))
            .route("/api/workout/:id/regenerate", post(Self::handle_regenerate))
            .with_state(resources)
    }

    /// Handle workout plan generation
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateWorkoutRequest>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.generate_workout(request).await,
            "Workout plan generated successfully",
            "Failed to generate workout plan",
        )
    }

    /// Handle workout plan fetch
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.get_workout(id).await,
            "Workout plan retrieved successfully",
            "Failed to fetch workout plan",
        )
    }

    /// Handle workout plan regeneration with partial modifications
    async fn handle_regenerate(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(modifications): Json<ModifyWorkoutRequest>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.regenerate_workout(id, modifications).await,
            "Workout plan regenerated successfully",
            "Failed to regenerate workout plan",
        )
    }
}
