// ABOUTME: Shared server resources passed to every route handler
// ABOUTME: Bundles the plan store, AI backend, and configuration behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Shared server resources
//!
//! One `ServerResources` instance is built at startup and shared across all
//! requests via `Arc`. There is no other shared mutable in-process state:
//! each request runs to completion independently against these handles.

use std::sync::Arc;

use crate::ai::PlanBackend;
use crate::config::ServerConfig;
use crate::store::PlanStore;

/// Shared resources for route handlers and services
pub struct ServerResources {
    /// Plan persistence backend
    pub store: Arc<dyn PlanStore>,
    /// Selected AI backend
    pub backend: Arc<dyn PlanBackend>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create server resources from constituent parts
    #[must_use]
    pub fn new(
        store: Arc<dyn PlanStore>,
        backend: Arc<dyn PlanBackend>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            backend,
            config,
        }
    }
}
