// ABOUTME: Google Gemini backend implementation for plan draft generation
// ABOUTME: Calls the Generative Language API in JSON response mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Gemini Backend
//!
//! Implementation of the [`PlanBackend`] trait against Google's Generative
//! Language API. The request asks for `application/json` response MIME type
//! so the draft can be deserialized directly from the candidate text.
//!
//! ## Configuration
//!
//! - `GEMINI_API_KEY`: API key from Google AI Studio (required)
//! - `GEMINI_MODEL`: model override (default: `gemini-2.5-flash`)

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{prompts, DietPlanDraft, PlanBackend, WorkoutPlanDraft};
use crate::errors::{AppError, AppResult};
use crate::models::{GenerateDietRequest, GenerateWorkoutRequest};

/// Environment variable for the Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable for the Gemini model override
const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Text part of content
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    response_mime_type: &'static str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// Google Gemini plan generation backend
pub struct GeminiBackend {
    api_key: String,
    client: Client,
    model: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a backend from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;
        let mut backend = Self::new(api_key);
        if let Ok(model) = env::var(GEMINI_MODEL_ENV) {
            if !model.is_empty() {
                backend.model = model;
            }
        }
        Ok(backend)
    }

    /// Set a custom model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the API URL for a method on the configured model
    fn build_url(&self, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{}:{method}?key={}",
            self.model, self.api_key
        )
    }

    /// Send a generation request and return the raw candidate text
    #[instrument(skip(self, system, prompt), fields(model = %self.model))]
    async fn generate_json(&self, system: &str, prompt: &str) -> AppResult<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart {
                    text: prompt.to_owned(),
                }],
            }],
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![ContentPart {
                    text: system.to_owned(),
                }],
            }),
            generation_config: GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: "application/json",
            },
        };

        debug!("Sending generation request to Gemini API");

        let response = self
            .client
            .post(self.build_url("generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::provider("gemini", format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::provider("gemini", format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            let message = serde_json::from_str::<serde_json::Value>(&response_text)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str().map(ToOwned::to_owned))
                })
                .unwrap_or(response_text);
            return Err(AppError::provider("gemini", message));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::provider("gemini", format!("Failed to parse response: {e}")))?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::provider("gemini", error.message));
        }

        gemini_response
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AppError::provider("gemini", "Response contained no candidates"))
    }

    /// Parse a draft out of the candidate text
    fn parse_draft<T: serde::de::DeserializeOwned>(text: &str) -> AppResult<T> {
        serde_json::from_str(text)
            .map_err(|e| AppError::provider("gemini", format!("Draft was not valid JSON: {e}")))
    }
}

#[async_trait]
impl PlanBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    async fn generate_diet(&self, request: &GenerateDietRequest) -> AppResult<DietPlanDraft> {
        let prompt = prompts::build_diet_prompt(request);
        let text = self
            .generate_json(prompts::DIET_SYSTEM_PROMPT, &prompt)
            .await?;
        Self::parse_draft(&text)
    }

    async fn generate_workout(
        &self,
        request: &GenerateWorkoutRequest,
    ) -> AppResult<WorkoutPlanDraft> {
        let prompt = prompts::build_workout_prompt(request);
        let text = self
            .generate_json(prompts::WORKOUT_SYSTEM_PROMPT, &prompt)
            .await?;
        Self::parse_draft(&text)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let url = format!("{API_BASE_URL}/models?key={}", self.api_key);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::provider("gemini", format!("Health check failed: {e}")))?;
        Ok(response.status().is_success())
    }
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
