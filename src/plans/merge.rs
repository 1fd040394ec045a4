// ABOUTME: Regeneration request merging for diet and workout plans
// ABOUTME: Fills unset modification fields from the stored plan's analogues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Regeneration Merger
//!
//! Builds a complete generation request from an existing plan plus partial
//! modifications. For every request field the merged value is the
//! modification when set, otherwise the corresponding stored field.
//!
//! The field correspondence is not 1:1 and must hold exactly per pair:
//! goal↔goal, difficulty↔difficulty, `days_per_week`↔`days_per_week`,
//! duration↔`estimated_duration`, calories↔`total_calories`,
//! restrictions↔restrictions. Prompt-only fields (equipment, target muscles,
//! preferences, meals per day, target protein, preferred/avoided foods) have
//! no stored analogue and pass through from the modifications only.
//!
//! `user_id` always comes from the existing plan: regeneration cannot change
//! plan ownership.

use crate::models::{
    DietPlan, GenerateDietRequest, GenerateWorkoutRequest, ModifyDietRequest, ModifyWorkoutRequest,
    WorkoutPlan,
};

/// Build a complete diet generation request from a stored plan and partial
/// modifications
#[must_use]
pub fn merge_diet_request(
    existing: &DietPlan,
    modifications: &ModifyDietRequest,
) -> GenerateDietRequest {
    GenerateDietRequest {
        user_id: existing.user_id.clone(),
        calories: modifications.calories.unwrap_or(existing.total_calories),
        goal: modifications
            .goal
            .clone()
            .unwrap_or_else(|| existing.goal.clone()),
        restrictions: Some(
            modifications
                .restrictions
                .clone()
                .unwrap_or_else(|| existing.restrictions.clone()),
        ),
        meals_per_day: modifications.meals_per_day,
        target_protein: modifications.target_protein,
        preferred_foods: modifications.preferred_foods.clone(),
        avoid_foods: modifications.avoid_foods.clone(),
        preferences: modifications.preferences.clone(),
    }
}

/// Build a complete workout generation request from a stored plan and partial
/// modifications
#[must_use]
pub fn merge_workout_request(
    existing: &WorkoutPlan,
    modifications: &ModifyWorkoutRequest,
) -> GenerateWorkoutRequest {
    GenerateWorkoutRequest {
        user_id: existing.user_id.clone(),
        goal: modifications
            .goal
            .clone()
            .unwrap_or_else(|| existing.goal.clone()),
        difficulty: modifications
            .difficulty
            .clone()
            .unwrap_or_else(|| existing.difficulty.clone()),
        days_per_week: modifications
            .days_per_week
            .unwrap_or(existing.days_per_week),
        duration: modifications
            .duration
            .unwrap_or(existing.estimated_duration),
        equipment: modifications.equipment.clone(),
        target_muscles: modifications.target_muscles.clone(),
        preferences: modifications.preferences.clone(),
    }
}
