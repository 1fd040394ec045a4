// ABOUTME: Integration tests for the workout plan route handlers
// ABOUTME: Tests the generate, fetch, and regenerate surface over a mock backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use common::{create_test_resources, MockBackend};
use helpers::axum_test::AxumTestRequest;
use planforge::routes::WorkoutRoutes;

use serde_json::{json, Value};
use uuid::Uuid;

async fn workout_router() -> (axum::Router, tempfile::TempDir) {
    let (resources, dir) = create_test_resources(MockBackend::new()).await;
    (WorkoutRoutes::routes(resources), dir)
}

async fn generate_plan(router: axum::Router) -> Value {
    let response = AxumTestRequest::post("/api/workout")
        .json(&json!({
            "userId": "u1",
            "goal": "strength",
            "difficulty": "intermediate",
            "daysPerWeek": 4,
            "duration": 45
        }))
        .send(router)
        .await;
    assert_eq!(response.status(), 200);
    response.json()
}

#[tokio::test]
async fn test_generate_returns_success_envelope() {
    let (router, _dir) = workout_router().await;
    let body = generate_plan(router).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Workout plan generated successfully");
    assert_eq!(body["data"]["goal"], "strength");
    // request duration lands on estimatedDuration
    assert_eq!(body["data"]["estimatedDuration"], 45);
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["exercises"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_round_trip() {
    let (router, _dir) = workout_router().await;
    let created = generate_plan(router.clone()).await;
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::get(&format!("/api/workout/{id}"))
        .send(router)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], id.as_str());
}

#[tokio::test]
async fn test_get_unknown_id_returns_not_found_envelope() {
    let (router, _dir) = workout_router().await;

    let response = AxumTestRequest::get(&format!("/api/workout/{}", Uuid::new_v4()))
        .send(router)
        .await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to fetch workout plan");
}

#[tokio::test]
async fn test_regenerate_fills_fields_from_stored_plan() {
    let (router, _dir) = workout_router().await;
    let created = generate_plan(router.clone()).await;
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post(&format!("/api/workout/{id}/regenerate"))
        .json(&json!({"difficulty": "advanced"}))
        .send(router)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Workout plan regenerated successfully");
    assert_eq!(body["data"]["difficulty"], "advanced");
    // unmodified fields fill from the stored plan
    assert_eq!(body["data"]["goal"], "strength");
    assert_eq!(body["data"]["daysPerWeek"], 4);
    assert_eq!(body["data"]["estimatedDuration"], 45);
    assert_ne!(body["data"]["id"], id.as_str());
}

#[tokio::test]
async fn test_no_adjust_calories_endpoint_for_workouts() {
    let (router, _dir) = workout_router().await;
    let created = generate_plan(router.clone()).await;
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post(&format!("/api/workout/{id}/adjust-calories/2000"))
        .send(router)
        .await;
    assert_eq!(response.status(), 404);
}
