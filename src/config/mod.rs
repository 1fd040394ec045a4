// ABOUTME: Configuration module organization for the planforge service
// ABOUTME: Re-exports the server config and shared configuration enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Configuration management
//!
//! Configuration is environment-only: every knob is an environment variable
//! with a sensible default, loaded once at startup.

/// Environment-based server configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{DatabaseConfig, ServerConfig};
pub use types::{AiProviderType, LogLevel};
