// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output format via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Structured logging setup
//!
//! Uses `tracing` with an `EnvFilter` so verbosity can be tuned per module
//! via `RUST_LOG` without code changes.

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "planforge=info,tower_http=info";

/// Initialize logging from the environment
///
/// Reads `RUST_LOG` for filter directives; falls back to service defaults.
/// Set `LOG_FORMAT=json` for machine-readable output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json_output = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(true))
            .try_init()?;
    }

    Ok(())
}
