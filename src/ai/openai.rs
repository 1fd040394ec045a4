// ABOUTME: OpenAI-compatible backend implementation for plan draft generation
// ABOUTME: Calls the chat completions endpoint with json_object response format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # OpenAI Backend
//!
//! Implementation of the [`PlanBackend`] trait against the `OpenAI` chat
//! completions API. Any `OpenAI`-compatible endpoint works by overriding the
//! base URL.
//!
//! ## Configuration
//!
//! - `OPENAI_API_KEY`: API key (required)
//! - `OPENAI_BASE_URL`: endpoint override (default: `https://api.openai.com/v1`)
//! - `OPENAI_MODEL`: model override (default: `gpt-4o-mini`)

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, instrument};

use super::{prompts, DietPlanDraft, PlanBackend, WorkoutPlanDraft};
use crate::errors::{AppError, AppResult};
use crate::models::{GenerateDietRequest, GenerateWorkoutRequest};

/// Environment variable for the `OpenAI` API key
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable for the endpoint override
const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable for the model override
const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
const DEFAULT_MODEL: &str = "gpt-4o-mini";

// ============================================================================
// API Request/Response Types (OpenAI wire format)
// ============================================================================

/// Chat completions request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    response_format: serde_json::Value,
}

/// Chat message in the `OpenAI` wire format
#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

/// Chat completions response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Option<Vec<OpenAiChoice>>,
    error: Option<OpenAiError>,
}

/// Response choice
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

/// Message within a response choice
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// API error body
#[derive(Debug, Deserialize)]
struct OpenAiError {
    message: String,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// `OpenAI`-compatible plan generation backend
pub struct OpenAiBackend {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl OpenAiBackend {
    /// Create a new `OpenAI` backend with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            client: Client::new(),
        }
    }

    /// Create a backend from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(OPENAI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{OPENAI_API_KEY_ENV} environment variable not set"))
        })?;
        let mut backend = Self::new(api_key);
        if let Ok(base_url) = env::var(OPENAI_BASE_URL_ENV) {
            if !base_url.is_empty() {
                backend.base_url = base_url.trim_end_matches('/').to_owned();
            }
        }
        if let Ok(model) = env::var(OPENAI_MODEL_ENV) {
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

    /// Send a completion request and return the raw message content
    #[instrument(skip(self, system, prompt), fields(model = %self.model))]
    async fn generate_json(&self, system: &str, prompt: &str) -> AppResult<String> {
        let request = OpenAiRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: system.to_owned(),
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt.to_owned(),
                },
            ],
            temperature: 0.7,
            response_format: json!({ "type": "json_object" }),
        };

        debug!("Sending completion request to OpenAI API");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::provider("openai", format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::provider("openai", format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "OpenAI API error");
            let message = serde_json::from_str::<serde_json::Value>(&response_text)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str().map(ToOwned::to_owned))
                })
                .unwrap_or(response_text);
            return Err(AppError::provider("openai", message));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::provider("openai", format!("Failed to parse response: {e}")))?;

        if let Some(error) = openai_response.error {
            return Err(AppError::provider("openai", error.message));
        }

        openai_response
            .choices
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::provider("openai", "Response contained no choices"))
    }

    /// Parse a draft out of the message content
    fn parse_draft<T: serde::de::DeserializeOwned>(text: &str) -> AppResult<T> {
        serde_json::from_str(text)
            .map_err(|e| AppError::provider("openai", format!("Draft was not valid JSON: {e}")))
    }
}

#[async_trait]
impl PlanBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
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
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::provider("openai", format!("Health check failed: {e}")))?;
        Ok(response.status().is_success())
    }
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
