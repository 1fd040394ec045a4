// ABOUTME: Main library entry point for the planforge plan generation service
// ABOUTME: Orchestrates AI providers, plan math, persistence, and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

#![deny(unsafe_code)]

//! # Planforge
//!
//! A thin orchestration service for AI-assisted workout and diet plan
//! generation. Requests are forwarded to a configured AI provider, the
//! returned draft is reshaped into the persisted schema, saved to the plan
//! store, and wrapped in a uniform response envelope.
//!
//! ## Architecture
//!
//! - **ai**: pluggable plan generation backends (Gemini, `OpenAI`)
//! - **plans**: rescaling, regeneration merging, and generation orchestration
//! - **store**: plan persistence behind the `PlanStore` trait
//! - **routes**: the HTTP surface, one module per domain
//! - **envelope**: the fixed success/failure response wrapper
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use planforge::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("{}", config.summary());
//! # Ok(())
//! # }
//! ```

/// AI backend abstraction and provider implementations
pub mod ai;
/// Configuration management
pub mod config;
/// Shared server resources
pub mod context;
/// Response envelope and result wrapping
pub mod envelope;
/// Unified error handling
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Domain models and request DTOs
pub mod models;
/// Plan domain logic (rescale, merge, orchestration)
pub mod plans;
/// HTTP route definitions
pub mod routes;
/// HTTP server assembly
pub mod server;
/// Plan persistence
pub mod store;
