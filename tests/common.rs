// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted mock AI backend, a tempfile SQLite store, and plan fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared test utilities for `planforge`
//!
//! Common setup functions to reduce duplication across integration tests.

use async_trait::async_trait;
use std::sync::{Arc, Once};
use tempfile::TempDir;

use planforge::{
    ai::{DietPlanDraft, PlanBackend, WorkoutPlanDraft},
    config::{AiProviderType, DatabaseConfig, LogLevel, ServerConfig},
    context::ServerResources,
    errors::{AppError, AppResult},
    models::{
        DietPlan, Exercise, GenerateDietRequest, GenerateWorkoutRequest, MacroBreakdown,
        MacroTotals, Meal, NutritionItem, WorkoutPlan,
    },
    store::SqliteStore,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Mock AI Backend
// ============================================================================

/// Scripted plan backend returning fixed drafts or a fixed failure
pub struct MockBackend {
    diet_draft: DietPlanDraft,
    workout_draft: WorkoutPlanDraft,
    fail_with: Option<String>,
}

impl MockBackend {
    /// Backend that returns the default fixture drafts
    pub fn new() -> Self {
        Self {
            diet_draft: sample_diet_draft(),
            workout_draft: sample_workout_draft(),
            fail_with: None,
        }
    }

    /// Backend that returns a specific diet draft
    pub fn with_diet_draft(mut self, draft: DietPlanDraft) -> Self {
        self.diet_draft = draft;
        self
    }

    /// Backend that fails every generation with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            diet_draft: sample_diet_draft(),
            workout_draft: sample_workout_draft(),
            fail_with: Some(message.to_owned()),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Backend"
    }

    async fn generate_diet(&self, _request: &GenerateDietRequest) -> AppResult<DietPlanDraft> {
        match &self.fail_with {
            Some(message) => Err(AppError::provider("mock", message.clone())),
            None => Ok(self.diet_draft.clone()),
        }
    }

    async fn generate_workout(
        &self,
        _request: &GenerateWorkoutRequest,
    ) -> AppResult<WorkoutPlanDraft> {
        match &self.fail_with {
            Some(message) => Err(AppError::provider("mock", message.clone())),
            None => Ok(self.workout_draft.clone()),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.fail_with.is_none())
    }
}

// ============================================================================
// Resource Builders
// ============================================================================

/// Server config pointing at a test database, independent of the environment
pub fn test_config(database_url: &str) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        database: DatabaseConfig {
            url: database_url.to_owned(),
            auto_migrate: true,
        },
        ai_provider: AiProviderType::OpenAi,
    }
}

/// Create a migrated SQLite store backed by a temporary file
///
/// The returned `TempDir` must be kept alive for the store's lifetime.
pub async fn create_test_store() -> (SqliteStore, TempDir) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite:{}/planforge-test.db", dir.path().display());
    let store = SqliteStore::new(&url).await.expect("Failed to open store");
    store.migrate().await.expect("Failed to migrate store");
    (store, dir)
}

/// Build server resources over a tempfile store and the given backend
pub async fn create_test_resources(
    backend: impl PlanBackend + 'static,
) -> (Arc<ServerResources>, TempDir) {
    let (store, dir) = create_test_store().await;
    let url = format!("sqlite:{}/planforge-test.db", dir.path().display());
    let resources = Arc::new(ServerResources::new(
        Arc::new(store),
        Arc::new(backend),
        Arc::new(test_config(&url)),
    ));
    (resources, dir)
}

// ============================================================================
// Fixtures
// ============================================================================

/// Two-meal diet draft summing to 1900 kcal
pub fn sample_diet_draft() -> DietPlanDraft {
    DietPlanDraft {
        name: "Lean Cut".to_owned(),
        description: "A simple calorie-deficit plan".to_owned(),
        meals: sample_meals(),
    }
}

/// Three-exercise workout draft
pub fn sample_workout_draft() -> WorkoutPlanDraft {
    WorkoutPlanDraft {
        name: "Push Day".to_owned(),
        description: "Upper-body pressing session".to_owned(),
        exercises: vec![
            Exercise {
                name: "Bench Press".to_owned(),
                sets: 4,
                reps: "6-8".to_owned(),
                rest_seconds: Some(120),
                muscle_group: Some("chest".to_owned()),
                notes: None,
            },
            Exercise {
                name: "Overhead Press".to_owned(),
                sets: 3,
                reps: "8-10".to_owned(),
                rest_seconds: Some(90),
                muscle_group: Some("shoulders".to_owned()),
                notes: None,
            },
            Exercise {
                name: "Dips".to_owned(),
                sets: 3,
                reps: "to failure".to_owned(),
                rest_seconds: None,
                muscle_group: None,
                notes: Some("Bodyweight only".to_owned()),
            },
        ],
    }
}

/// Two meals: breakfast 800 kcal (with fiber), dinner 1100 kcal (no fiber)
pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal {
            name: "Breakfast".to_owned(),
            items: vec![
                NutritionItem {
                    name: "Oats".to_owned(),
                    quantity: "100g".to_owned(),
                    calories: 380,
                    protein: Some(13),
                    carbs: Some(68),
                    fat: Some(7),
                },
                NutritionItem {
                    name: "Greek Yogurt".to_owned(),
                    quantity: "250g".to_owned(),
                    calories: 420,
                    protein: Some(25),
                    carbs: Some(12),
                    fat: None,
                },
            ],
            total_calories: 800,
            macros: MacroBreakdown {
                protein: 38,
                carbs: 80,
                fat: 12,
                fiber: Some(10),
            },
        },
        Meal {
            name: "Dinner".to_owned(),
            items: vec![NutritionItem {
                name: "Chicken and Rice".to_owned(),
                quantity: "1 plate".to_owned(),
                calories: 1100,
                protein: Some(60),
                carbs: Some(110),
                fat: Some(30),
            }],
            total_calories: 1100,
            macros: MacroBreakdown {
                protein: 60,
                carbs: 110,
                fat: 30,
                fiber: None,
            },
        },
    ]
}

/// A complete diet plan record with the fixture meals (2000 kcal target)
pub fn sample_diet_plan(user_id: &str) -> DietPlan {
    let meals = sample_meals();
    DietPlan {
        id: None,
        user_id: user_id.to_owned(),
        name: "Lean Cut".to_owned(),
        description: "A simple calorie-deficit plan".to_owned(),
        goal: "cut".to_owned(),
        total_calories: 2000,
        target_macros: MacroTotals {
            protein: 98,
            carbs: 190,
            fat: 42,
            fiber: 10,
        },
        meals,
        restrictions: vec!["no-pork".to_owned()],
    }
}

/// A complete workout plan record with the fixture exercises
pub fn sample_workout_plan(user_id: &str) -> WorkoutPlan {
    let draft = sample_workout_draft();
    WorkoutPlan {
        id: None,
        user_id: user_id.to_owned(),
        name: draft.name,
        description: draft.description,
        goal: "strength".to_owned(),
        difficulty: "intermediate".to_owned(),
        days_per_week: 4,
        estimated_duration: 45,
        exercises: draft.exercises,
    }
}
