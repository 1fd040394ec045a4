// ABOUTME: SQLite implementation of the plan store using sqlx
// ABOUTME: Persists plans as JSON documents keyed by UUID with upsert-on-save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! SQLite plan store
//!
//! Plans are stored as JSON documents alongside their indexed owner id.
//! `save_*_plan` is an upsert: a plan without an id gets a fresh UUIDv4 and a
//! new row; a plan with an id overwrites the existing row in place.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

use super::PlanStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, WorkoutPlan};

/// SQLite-backed plan store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store from a SQLite connection string
    ///
    /// The database file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid or the pool
    /// cannot be established.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a store from an existing pool
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS diet_plans (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create diet_plans table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_plans (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout_plans table: {e}")))?;

        Ok(())
    }

    /// Fetch a JSON payload by id from a plan table
    async fn get_payload(&self, table: &str, id: Uuid) -> AppResult<Option<String>> {
        let query = format!("SELECT payload FROM {table} WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get plan: {e}")))?;

        Ok(row.map(|r| r.get("payload")))
    }

    /// Upsert a JSON payload into a plan table
    async fn save_payload(
        &self,
        table: &str,
        id: Uuid,
        user_id: &str,
        payload: &str,
    ) -> AppResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let query = format!(
            r"
            INSERT INTO {table} (id, user_id, payload, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT(id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "
        );

        sqlx::query(&query)
            .bind(id.to_string())
            .bind(user_id)
            .bind(payload)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to save plan: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl PlanStore for SqliteStore {
    async fn get_diet_plan(&self, id: Uuid) -> AppResult<Option<DietPlan>> {
        let payload = self.get_payload("diet_plans", id).await?;
        payload
            .map(|p| {
                serde_json::from_str(&p).map_err(|e| {
                    AppError::serialization(format!("Stored diet plan is corrupt: {e}"))
                })
            })
            .transpose()
    }

    async fn save_diet_plan(&self, plan: &DietPlan) -> AppResult<DietPlan> {
        let mut saved = plan.clone();
        let id = saved.id.unwrap_or_else(Uuid::new_v4);
        saved.id = Some(id);

        let payload = serde_json::to_string(&saved)
            .map_err(|e| AppError::serialization(format!("Failed to serialize diet plan: {e}")))?;

        self.save_payload("diet_plans", id, &saved.user_id, &payload)
            .await?;

        Ok(saved)
    }

    async fn get_workout_plan(&self, id: Uuid) -> AppResult<Option<WorkoutPlan>> {
        let payload = self.get_payload("workout_plans", id).await?;
        payload
            .map(|p| {
                serde_json::from_str(&p).map_err(|e| {
                    AppError::serialization(format!("Stored workout plan is corrupt: {e}"))
                })
            })
            .transpose()
    }

    async fn save_workout_plan(&self, plan: &WorkoutPlan) -> AppResult<WorkoutPlan> {
        let mut saved = plan.clone();
        let id = saved.id.unwrap_or_else(Uuid::new_v4);
        saved.id = Some(id);

        let payload = serde_json::to_string(&saved).map_err(|e| {
            AppError::serialization(format!("Failed to serialize workout plan: {e}"))
        })?;

        self.save_payload("workout_plans", id, &saved.user_id, &payload)
            .await?;

        Ok(saved)
    }
}
