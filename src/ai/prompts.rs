// ABOUTME: Prompt construction for diet and workout plan generation requests
// ABOUTME: Builds JSON-schema-bearing prompts from structured request fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Prompt construction
//!
//! Both providers receive the same prompts; the only per-provider difference
//! is how JSON output mode is requested on the wire.

use std::fmt::Write as _;

use crate::models::{GenerateDietRequest, GenerateWorkoutRequest};

/// System instruction for diet plan generation
pub const DIET_SYSTEM_PROMPT: &str = "You are a professional nutritionist. \
    Respond with a single JSON object and nothing else. The object must have \
    the shape {\"name\": string, \"description\": string, \"meals\": [{\"name\": string, \
    \"items\": [{\"name\": string, \"quantity\": string, \"calories\": integer, \
    \"protein\"?: integer, \"carbs\"?: integer, \"fat\"?: integer}], \
    \"totalCalories\": integer, \"macros\": {\"protein\": integer, \"carbs\": integer, \
    \"fat\": integer, \"fiber\"?: integer}}]}. All quantities are integers in \
    grams except calories.";

/// System instruction for workout plan generation
pub const WORKOUT_SYSTEM_PROMPT: &str = "You are a professional strength coach. \
    Respond with a single JSON object and nothing else. The object must have \
    the shape {\"name\": string, \"description\": string, \"exercises\": [{\"name\": string, \
    \"sets\": integer, \"reps\": string, \"restSeconds\"?: integer, \
    \"muscleGroup\"?: string, \"notes\"?: string}]}.";

/// Build the user prompt for a diet plan generation request
#[must_use]
pub fn build_diet_prompt(request: &GenerateDietRequest) -> String {
    let mut prompt = format!(
        "Create a one-day diet plan targeting {} kcal for the goal \"{}\".",
        request.calories, request.goal
    );

    if let Some(meals) = request.meals_per_day {
        let _ = write!(prompt, " Split it into {meals} meals.");
    }
    if let Some(protein) = request.target_protein {
        let _ = write!(prompt, " Aim for at least {protein}g of protein.");
    }
    if let Some(restrictions) = &request.restrictions {
        if !restrictions.is_empty() {
            let _ = write!(
                prompt,
                " Respect these dietary restrictions: {}.",
                restrictions.join(", ")
            );
        }
    }
    if let Some(foods) = &request.preferred_foods {
        if !foods.is_empty() {
            let _ = write!(prompt, " Favor these foods: {}.", foods.join(", "));
        }
    }
    if let Some(foods) = &request.avoid_foods {
        if !foods.is_empty() {
            let _ = write!(prompt, " Avoid these foods: {}.", foods.join(", "));
        }
    }
    if let Some(preferences) = &request.preferences {
        let _ = write!(prompt, " Additional preferences: {preferences}.");
    }

    prompt
}

/// Build the user prompt for a workout plan generation request
#[must_use]
pub fn build_workout_prompt(request: &GenerateWorkoutRequest) -> String {
    let mut prompt = format!(
        "Create a {} workout plan for the goal \"{}\", {} days per week, \
         about {} minutes per session.",
        request.difficulty, request.goal, request.days_per_week, request.duration
    );

    if let Some(equipment) = &request.equipment {
        if !equipment.is_empty() {
            let _ = write!(prompt, " Available equipment: {}.", equipment.join(", "));
        }
    }
    if let Some(muscles) = &request.target_muscles {
        if !muscles.is_empty() {
            let _ = write!(prompt, " Emphasize: {}.", muscles.join(", "));
        }
    }
    if let Some(preferences) = &request.preferences {
        let _ = write!(prompt, " Additional preferences: {preferences}.");
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diet_request() -> GenerateDietRequest {
        GenerateDietRequest {
            user_id: "u1".to_owned(),
            calories: 2200,
            goal: "cut".to_owned(),
            restrictions: Some(vec!["vegetarian".to_owned()]),
            meals_per_day: Some(4),
            target_protein: None,
            preferred_foods: None,
            avoid_foods: Some(vec!["peanuts".to_owned()]),
            preferences: None,
        }
    }

    #[test]
    fn test_diet_prompt_includes_target_and_restrictions() {
        let prompt = build_diet_prompt(&diet_request());
        assert!(prompt.contains("2200 kcal"));
        assert!(prompt.contains("4 meals"));
        assert!(prompt.contains("vegetarian"));
        assert!(prompt.contains("peanuts"));
    }

    #[test]
    fn test_diet_prompt_omits_unset_fields() {
        let mut request = diet_request();
        request.restrictions = None;
        request.meals_per_day = None;
        request.avoid_foods = None;
        let prompt = build_diet_prompt(&request);
        assert!(!prompt.contains("restrictions"));
        assert!(!prompt.contains("meals."));
    }
}
