// ABOUTME: Diet plan route handlers for generation, fetch, regenerate, and rescale
// ABOUTME: Validates the calories path parameter before the core is invoked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Diet plan routes
//!
//! Every handler wraps its core result through the envelope combinator, so
//! no error escapes to the transport layer unenveloped. The adjust-calories
//! path parameter is validated to an integer in [1000, 5000] here; the core
//! is never invoked for out-of-range or non-numeric values.

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
use crate::errors::AppError;
use crate::models::{GenerateDietRequest, ModifyDietRequest};
use crate::plans::{PlanService, CALORIE_RANGE_MESSAGE, MAX_CALORIE_TARGET, MIN_CALORIE_TARGET};

/// Diet plan routes
pub struct DietRoutes;

impl DietRoutes {
    /// Create all diet plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/diet", post(Self::handle_generate))
            .route("/api/diet/:id", get(Self::handle_get))
            .route("/api/diet/:id/regenerate", post(Self::handle_regenerate))
            .route(
                "/api/diet/:id/adjust-calories/:calories",
                post(Self::handle_adjust_calories),
            )
            .with_state(resources)
    }

    /// Handle diet plan generation
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateDietRequest>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.generate_diet(request).await,
            "Diet plan generated successfully",
            "Failed to generate diet plan",
        )
    }

    /// Handle diet plan fetch
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.get_diet(id).await,
            "Diet plan retrieved successfully",
            "Failed to fetch diet plan",
        )
    }

    /// Handle diet plan regeneration with partial modifications
    async fn handle_regenerate(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(modifications): Json<ModifyDietRequest>,
    ) -> Response {
        let service = PlanService::new(resources);
        envelope::respond(
            service.regenerate_diet(id, modifications).await,
            "Diet plan regenerated successfully",
            "Failed to regenerate diet plan",
        )
    }

    /// Handle calorie adjustment of an existing diet plan
    ///
    /// The calories segment is taken as a signed integer so negative values
    /// reach the range check instead of failing extraction.
    async fn handle_adjust_calories(
        State(resources): State<Arc<ServerResources>>,
        Path((id, calories)): Path<(Uuid, i64)>,
    ) -> Response {
        let in_range = i64::from(MIN_CALORIE_TARGET) <= calories
            && calories <= i64::from(MAX_CALORIE_TARGET);
        if !in_range {
            return envelope::failure(
                &AppError::out_of_range(CALORIE_RANGE_MESSAGE),
                CALORIE_RANGE_MESSAGE,
            );
        }

        let service = PlanService::new(resources);
        envelope::respond(
            service.adjust_calories(id, calories as u32).await,
            "Diet plan calories adjusted successfully",
            "Failed to adjust diet plan calories",
        )
    }
}
