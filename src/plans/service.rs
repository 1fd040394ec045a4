// ABOUTME: Plan generation orchestration over the AI backend and the store
// ABOUTME: Implements generate, fetch, regenerate, and adjust-calories flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Plan Service
//!
//! Thin orchestration over the AI backend and the plan store. Each operation
//! awaits its I/O sequentially within the request; there is no fan-out, no
//! retry, and no deadline beyond what the transport enforces. A failure from
//! the backend or the store surfaces immediately as that operation's failure.

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::merge::{merge_diet_request, merge_workout_request};
use super::rescale::{aggregate, rescale, validate_calorie_target};
use crate::context::ServerResources;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DietPlan, GenerateDietRequest, GenerateWorkoutRequest, ModifyDietRequest, ModifyWorkoutRequest,
    WorkoutPlan,
};

/// Plan generation and adjustment service
pub struct PlanService {
    resources: Arc<ServerResources>,
}

impl PlanService {
    /// Create a service over shared server resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    // ========================================================================
    // Diet Plans
    // ========================================================================

    /// Generate a diet plan and persist it
    ///
    /// The saved plan keeps the *requested* calorie target even when the
    /// provider's meals sum differently; generation does not auto-correct the
    /// draft to the target (only an explicit adjust-calories does). The
    /// plan's `target_macros` aggregates the provider's meals as returned.
    ///
    /// # Errors
    ///
    /// Returns the backend's or store's error unchanged.
    pub async fn generate_diet(&self, request: GenerateDietRequest) -> AppResult<DietPlan> {
        debug!(user_id = %request.user_id, "Generating diet plan via {}", self.resources.backend.name());

        let draft = self.resources.backend.generate_diet(&request).await?;
        let target_macros = aggregate(&draft.meals);

        let plan = DietPlan {
            id: None,
            user_id: request.user_id,
            name: draft.name,
            description: draft.description,
            goal: request.goal,
            total_calories: request.calories,
            target_macros,
            meals: draft.meals,
            restrictions: request.restrictions.unwrap_or_default(),
        };

        let saved = self.resources.store.save_diet_plan(&plan).await?;
        info!(plan_id = ?saved.id, "Diet plan saved");
        Ok(saved)
    }

    /// Fetch a diet plan by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on a lookup miss.
    pub async fn get_diet(&self, id: Uuid) -> AppResult<DietPlan> {
        self.resources
            .store
            .get_diet_plan(id)
            .await?
            .ok_or_else(|| AppError::not_found("Diet plan"))
    }

    /// Regenerate a diet plan with partial modifications
    ///
    /// Unset fields are filled from the stored plan, then the merged request
    /// flows through the normal generation path; the regenerated plan is
    /// saved as a new record and the prior plan stays retrievable.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` before any merge when the plan id is unknown.
    pub async fn regenerate_diet(
        &self,
        id: Uuid,
        modifications: ModifyDietRequest,
    ) -> AppResult<DietPlan> {
        let existing = self.get_diet(id).await?;
        let merged = merge_diet_request(&existing, &modifications);
        self.generate_diet(merged).await
    }

    /// Rescale a diet plan to a new calorie target and persist the result
    ///
    /// The rescaled plan keeps the existing id, so the save overwrites the
    /// stored plan in place. The target is validated before any store access,
    /// so out-of-range values perform no read or write.
    ///
    /// # Errors
    ///
    /// - `ValueOutOfRange` for targets outside [1000, 5000]
    /// - `NotFound` on a lookup miss
    /// - `InvalidState` when the stored plan's calorie total is zero
    pub async fn adjust_calories(&self, id: Uuid, calories: u32) -> AppResult<DietPlan> {
        validate_calorie_target(calories)?;

        let existing = self.get_diet(id).await?;
        let rescaled = rescale(&existing, calories)?;

        let saved = self.resources.store.save_diet_plan(&rescaled).await?;
        info!(plan_id = ?saved.id, calories, "Diet plan rescaled");
        Ok(saved)
    }

    // ========================================================================
    // Workout Plans
    // ========================================================================

    /// Generate a workout plan and persist it
    ///
    /// # Errors
    ///
    /// Returns the backend's or store's error unchanged.
    pub async fn generate_workout(&self, request: GenerateWorkoutRequest) -> AppResult<WorkoutPlan> {
        debug!(user_id = %request.user_id, "Generating workout plan via {}", self.resources.backend.name());

        let draft = self.resources.backend.generate_workout(&request).await?;

        let plan = WorkoutPlan {
            id: None,
            user_id: request.user_id,
            name: draft.name,
            description: draft.description,
            goal: request.goal,
            difficulty: request.difficulty,
            days_per_week: request.days_per_week,
            estimated_duration: request.duration,
            exercises: draft.exercises,
        };

        let saved = self.resources.store.save_workout_plan(&plan).await?;
        info!(plan_id = ?saved.id, "Workout plan saved");
        Ok(saved)
    }

    /// Fetch a workout plan by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on a lookup miss.
    pub async fn get_workout(&self, id: Uuid) -> AppResult<WorkoutPlan> {
        self.resources
            .store
            .get_workout_plan(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout plan"))
    }

    /// Regenerate a workout plan with partial modifications
    ///
    /// # Errors
    ///
    /// Returns `NotFound` before any merge when the plan id is unknown.
    pub async fn regenerate_workout(
        &self,
        id: Uuid,
        modifications: ModifyWorkoutRequest,
    ) -> AppResult<WorkoutPlan> {
        let existing = self.get_workout(id).await?;
        let merged = merge_workout_request(&existing, &modifications);
        self.generate_workout(merged).await
    }
}
