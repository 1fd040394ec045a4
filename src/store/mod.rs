// ABOUTME: Plan persistence abstraction for the planforge service
// ABOUTME: Defines the PlanStore trait implemented by the SQLite backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Plan Store
//!
//! Persistence interface for diet and workout plans. The application layer
//! only sees this trait; the concrete backend is chosen at startup.
//!
//! Save semantics: the store assigns a UUID on first save (plan id absent)
//! and overwrites in place when the plan carries an existing id. Concurrent
//! saves of the same id are last-write-wins; the core does not attempt to
//! detect that race.

mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{DietPlan, WorkoutPlan};

/// Core plan persistence trait
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Get a diet plan by id
    async fn get_diet_plan(&self, id: Uuid) -> AppResult<Option<DietPlan>>;

    /// Save a diet plan, assigning an id on first save
    ///
    /// Returns the saved plan with its id populated.
    async fn save_diet_plan(&self, plan: &DietPlan) -> AppResult<DietPlan>;

    /// Get a workout plan by id
    async fn get_workout_plan(&self, id: Uuid) -> AppResult<Option<WorkoutPlan>>;

    /// Save a workout plan, assigning an id on first save
    async fn save_workout_plan(&self, plan: &WorkoutPlan) -> AppResult<WorkoutPlan>;
}
