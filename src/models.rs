// ABOUTME: Domain models for diet and workout plans and their request DTOs
// ABOUTME: Defines the persisted plan schema and the generation/modification shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Domain Models
//!
//! Persisted plan records (`DietPlan`, `WorkoutPlan`), their building blocks,
//! and the request DTOs for generation and regeneration. All types serialize
//! camelCase on the wire.
//!
//! Plan records are immutable values from the core's point of view: the
//! rescaler and the regeneration merger always construct new values and never
//! mutate their inputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Nutrition Building Blocks
// ============================================================================

/// A single food item within a meal
///
/// `calories` is required; the individual macros are optional and stay absent
/// when the provider did not report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionItem {
    /// Food name
    pub name: String,
    /// Display quantity, e.g. "150g" or "1 cup"
    pub quantity: String,
    /// Calories for this item
    pub calories: u32,
    /// Protein in grams, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    /// Carbohydrates in grams, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat in grams, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Per-meal macro breakdown
///
/// Protein, carbs, and fat are always present; fiber stays absent when the
/// provider did not report it (never coerced to zero on the meal itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBreakdown {
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
    /// Fiber in grams, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>,
}

/// Aggregate macro totals across all meals of a plan
///
/// The aggregate is a total, so absent fiber on a meal counts as zero here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    /// Total protein in grams
    pub protein: u32,
    /// Total carbohydrates in grams
    pub carbs: u32,
    /// Total fat in grams
    pub fat: u32,
    /// Total fiber in grams
    pub fiber: u32,
}

/// A meal within a diet plan
///
/// `total_calories` and `macros` are derived from `items` but stored
/// denormalized; rescaling keeps them consistent with the scaled items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name, e.g. "Breakfast"
    pub name: String,
    /// Ordered food items
    pub items: Vec<NutritionItem>,
    /// Total calories for the meal
    pub total_calories: u32,
    /// Macro breakdown for the meal
    pub macros: MacroBreakdown,
}

// ============================================================================
// Plan Records
// ============================================================================

/// A persisted diet plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Store-assigned id; absent until the first save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Owning user id
    pub user_id: String,
    /// Plan name
    pub name: String,
    /// Plan description
    pub description: String,
    /// Dietary goal, e.g. "cut" or "bulk"
    pub goal: String,
    /// Calorie target for the plan
    pub total_calories: u32,
    /// Aggregate of all meals' macros
    pub target_macros: MacroTotals,
    /// Ordered meals
    pub meals: Vec<Meal>,
    /// Dietary restrictions, e.g. "vegetarian"
    pub restrictions: Vec<String>,
}

/// A single exercise within a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetition scheme, e.g. "8-12"
    pub reps: String,
    /// Rest between sets in seconds, if specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Primary muscle group, if specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    /// Coaching notes, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A persisted workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Store-assigned id; absent until the first save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Owning user id
    pub user_id: String,
    /// Plan name
    pub name: String,
    /// Plan description
    pub description: String,
    /// Training goal, e.g. "strength"
    pub goal: String,
    /// Difficulty level, e.g. "beginner"
    pub difficulty: String,
    /// Training days per week
    pub days_per_week: u32,
    /// Estimated session duration in minutes
    pub estimated_duration: u32,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Generation Requests
// ============================================================================

/// Request to generate a diet plan
///
/// Everything except `user_id`, `calories`, and `goal` is optional and only
/// feeds the provider prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDietRequest {
    /// Owning user id
    pub user_id: String,
    /// Calorie target
    pub calories: u32,
    /// Dietary goal
    pub goal: String,
    /// Dietary restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<String>>,
    /// Meals per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    /// Daily protein target in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protein: Option<u32>,
    /// Foods to favor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_foods: Option<Vec<String>>,
    /// Foods to avoid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_foods: Option<Vec<String>>,
    /// Free-form preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// Partial modifications for diet plan regeneration
///
/// Unset fields are filled from the existing plan where a stored analogue
/// exists; prompt-only fields stay absent unless supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDietRequest {
    /// New calorie target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// New dietary goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// New dietary restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<String>>,
    /// Meals per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    /// Daily protein target in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protein: Option<u32>,
    /// Foods to favor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_foods: Option<Vec<String>>,
    /// Foods to avoid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_foods: Option<Vec<String>>,
    /// Free-form preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// Request to generate a workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkoutRequest {
    /// Owning user id
    pub user_id: String,
    /// Training goal
    pub goal: String,
    /// Difficulty level
    pub difficulty: String,
    /// Training days per week
    pub days_per_week: u32,
    /// Session duration in minutes
    pub duration: u32,
    /// Available equipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    /// Muscle groups to emphasize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_muscles: Option<Vec<String>>,
    /// Free-form preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// Partial modifications for workout plan regeneration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyWorkoutRequest {
    /// New training goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// New difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// New training days per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<u32>,
    /// New session duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Available equipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    /// Muscle groups to emphasize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_muscles: Option<Vec<String>>,
    /// Free-form preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_serializes_camel_case() {
        let meal = Meal {
            name: "Breakfast".to_owned(),
            items: vec![NutritionItem {
                name: "Oats".to_owned(),
                quantity: "80g".to_owned(),
                calories: 300,
                protein: Some(10),
                carbs: Some(54),
                fat: None,
            }],
            total_calories: 300,
            macros: MacroBreakdown {
                protein: 10,
                carbs: 54,
                fat: 6,
                fiber: None,
            },
        };

        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["totalCalories"], 300);
        assert!(json["macros"].get("fiber").is_none());
        assert!(json["items"][0].get("fat").is_none());
    }

    #[test]
    fn test_plan_id_absent_until_assigned() {
        let plan = DietPlan {
            id: None,
            user_id: "u1".to_owned(),
            name: "Cut".to_owned(),
            description: String::new(),
            goal: "cut".to_owned(),
            total_calories: 2000,
            target_macros: MacroTotals::default(),
            meals: Vec::new(),
            restrictions: Vec::new(),
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["userId"], "u1");
    }
}
