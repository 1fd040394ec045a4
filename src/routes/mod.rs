// ABOUTME: Route module organization for planforge HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! Route module for the planforge HTTP surface
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the plan service.

/// Diet plan routes
pub mod diet;
/// Health check and system status routes
pub mod health;
/// Workout plan routes
pub mod workout;

/// Diet plan route handlers
pub use diet::DietRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Workout plan route handlers
pub use workout::WorkoutRoutes;
