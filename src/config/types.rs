// ABOUTME: Shared configuration enums for the planforge service
// ABOUTME: Contains LogLevel and AiProviderType used across config modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Shared configuration types

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display};

/// Log level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging (default)
    #[default]
    Info,
    /// Warn level logging
    Warn,
    /// Error level logging
    Error,
}

impl LogLevel {
    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// String representation for tracing filter directives
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI provider selection for plan generation
///
/// Exactly two providers are recognized. Backend selection is not
/// safety-critical, so a missing or unrecognized value falls back to the
/// primary provider instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    /// OpenAI-compatible provider (primary default)
    #[default]
    OpenAi,
    /// Google Gemini provider
    Gemini,
}

impl AiProviderType {
    /// Environment variable name for provider selection
    pub const ENV_VAR: &'static str = "PLANFORGE_AI_PROVIDER";

    /// Parse from string with fallback to the primary provider
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Self::Gemini,
            // Default fallback (including "openai")
            _ => Self::OpenAi,
        }
    }

    /// Load from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Stable identifier string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }
}

impl Display for AiProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!(
            AiProviderType::from_str_or_default("gemini"),
            AiProviderType::Gemini
        );
        assert_eq!(
            AiProviderType::from_str_or_default("Google"),
            AiProviderType::Gemini
        );
        assert_eq!(
            AiProviderType::from_str_or_default("openai"),
            AiProviderType::OpenAi
        );
    }

    #[test]
    fn test_unknown_provider_falls_back_to_primary() {
        assert_eq!(
            AiProviderType::from_str_or_default("mistral"),
            AiProviderType::OpenAi
        );
        assert_eq!(
            AiProviderType::from_str_or_default(""),
            AiProviderType::OpenAi
        );
    }
}
