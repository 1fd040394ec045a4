// ABOUTME: AI backend abstraction layer for pluggable plan generation providers
// ABOUTME: Defines the PlanBackend contract implemented by Gemini and OpenAI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # AI Backend Service Provider Interface
//!
//! This module defines the contract an AI provider must implement to generate
//! plan drafts for planforge. A backend receives a structured request and
//! returns a provider-shaped draft (name, description, meals or exercises);
//! everything downstream of the draft (aggregation, persistence, envelopes)
//! is provider-agnostic.
//!
//! Provider failures are uniformly fatal for the request: the upstream error
//! message is passed through verbatim and no retries are attempted.

mod gemini;
mod openai;
pub mod prompts;
mod provider;

pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;
pub use provider::PlanProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::{Exercise, GenerateDietRequest, GenerateWorkoutRequest, Meal};

// ============================================================================
// Draft Types
// ============================================================================

/// Provider-shaped diet plan draft
///
/// Drafts carry only what the provider produced; store-side fields (id,
/// user, calorie target, aggregate macros) are attached by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanDraft {
    /// Plan name proposed by the provider
    pub name: String,
    /// Plan description proposed by the provider
    pub description: String,
    /// Meals with items and denormalized per-meal totals
    pub meals: Vec<Meal>,
}

/// Provider-shaped workout plan draft
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanDraft {
    /// Plan name proposed by the provider
    pub name: String,
    /// Plan description proposed by the provider
    pub description: String,
    /// Exercises in session order
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Backend Trait
// ============================================================================

/// AI backend trait for plan draft generation
///
/// Implement this trait to add a new provider to planforge. Selection between
/// implementations happens once at startup via [`PlanProvider`].
#[async_trait]
pub trait PlanBackend: Send + Sync {
    /// Unique provider identifier (e.g. "gemini", "openai")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Generate a diet plan draft from a structured request
    async fn generate_diet(&self, request: &GenerateDietRequest) -> AppResult<DietPlanDraft>;

    /// Generate a workout plan draft from a structured request
    async fn generate_workout(
        &self,
        request: &GenerateWorkoutRequest,
    ) -> AppResult<WorkoutPlanDraft>;

    /// Check that the provider is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
