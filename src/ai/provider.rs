// ABOUTME: Unified plan backend selector for runtime provider switching
// ABOUTME: Abstracts over Gemini and OpenAI based on environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Plan Provider Selector
//!
//! A unified wrapper over the two recognized backends, configured at startup
//! via the `PLANFORGE_AI_PROVIDER` environment variable:
//! - `openai` (default): `OpenAI` chat completions
//! - `gemini`: Google Gemini
//!
//! Unknown values fall back to the primary `OpenAI` backend; add new
//! providers by adding variants here, not branches at call sites.

use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::{DietPlanDraft, GeminiBackend, OpenAiBackend, PlanBackend, WorkoutPlanDraft};
use crate::config::AiProviderType;
use crate::errors::AppResult;
use crate::models::{GenerateDietRequest, GenerateWorkoutRequest};

/// Unified plan backend that wraps Gemini or `OpenAI`
///
/// Provides a consistent interface regardless of which underlying provider
/// is configured.
pub enum PlanProvider {
    /// Google Gemini backend
    Gemini(GeminiBackend),
    /// `OpenAI`-compatible backend
    OpenAi(OpenAiBackend),
}

impl PlanProvider {
    /// Create a provider from environment configuration
    ///
    /// Reads `PLANFORGE_AI_PROVIDER` to determine which backend to use.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected backend's API key environment
    /// variable is missing.
    pub fn from_env() -> AppResult<Self> {
        let provider_type = AiProviderType::from_env();

        info!(
            "Initializing AI provider: {} (set {} to change)",
            provider_type,
            AiProviderType::ENV_VAR
        );

        Self::create(provider_type)
    }

    /// Create a provider for a specific type
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized.
    pub fn create(provider_type: AiProviderType) -> AppResult<Self> {
        match provider_type {
            AiProviderType::Gemini => Ok(Self::Gemini(GeminiBackend::from_env()?)),
            AiProviderType::OpenAi => Ok(Self::OpenAi(OpenAiBackend::from_env()?)),
        }
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> AiProviderType {
        match self {
            Self::Gemini(_) => AiProviderType::Gemini,
            Self::OpenAi(_) => AiProviderType::OpenAi,
        }
    }
}

#[async_trait]
impl PlanBackend for PlanProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(b) => b.name(),
            Self::OpenAi(b) => b.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(b) => b.display_name(),
            Self::OpenAi(b) => b.display_name(),
        }
    }

    async fn generate_diet(&self, request: &GenerateDietRequest) -> AppResult<DietPlanDraft> {
        match self {
            Self::Gemini(b) => b.generate_diet(request).await,
            Self::OpenAi(b) => b.generate_diet(request).await,
        }
    }

    async fn generate_workout(
        &self,
        request: &GenerateWorkoutRequest,
    ) -> AppResult<WorkoutPlanDraft> {
        match self {
            Self::Gemini(b) => b.generate_workout(request).await,
            Self::OpenAi(b) => b.generate_workout(request).await,
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self {
            Self::Gemini(b) => b.health_check().await,
            Self::OpenAi(b) => b.health_check().await,
        }
    }
}

impl fmt::Debug for PlanProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(_) => f.debug_tuple("PlanProvider::Gemini").finish(),
            Self::OpenAi(_) => f.debug_tuple("PlanProvider::OpenAi").finish(),
        }
    }
}
