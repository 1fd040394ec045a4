// ABOUTME: Plan domain logic module organization
// ABOUTME: Rescaling, regeneration merging, and generation orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Plan Domain Logic
//!
//! The computational core of planforge: the pure rescaler and aggregator,
//! the regeneration merger, and the orchestration service tying the AI
//! backend and the store together.

/// Regeneration request merging
pub mod merge;
/// Proportional calorie rescaling and macro aggregation
pub mod rescale;
/// Generation orchestration service
pub mod service;

pub use merge::{merge_diet_request, merge_workout_request};
pub use rescale::{
    aggregate, rescale, validate_calorie_target, CALORIE_RANGE_MESSAGE, MAX_CALORIE_TARGET,
    MIN_CALORIE_TARGET,
};
pub use service::PlanService;
