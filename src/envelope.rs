// ABOUTME: Fixed response envelope shared by every planforge HTTP operation
// ABOUTME: Provides the success/failure wrapper and the result-wrapping combinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Response Envelope
//!
//! Every core result is wrapped as `{success: true, data, message?}` or
//! `{success: false, error, message?}`. The wrap happens in one place
//! ([`respond`]) rather than being duplicated per call site, so no error ever
//! escapes a handler unenveloped.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Uniform response envelope for all API operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Underlying cause text on failure, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Fixed, action-oriented summary of the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Successful envelope carrying data and a summary message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failure envelope
    ///
    /// `error` carries the underlying cause's text verbatim; `message` is the
    /// fixed human-readable summary for the operation. Callers must not assume
    /// the error text is stable across backend changes.
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
        }
    }
}

/// Wrap a core operation result into an enveloped HTTP response
///
/// Success renders `200 OK` with the success envelope; failure renders the
/// error's HTTP status with the failure envelope carrying `summary` as the
/// fixed message and the error's own text as the verbatim cause.
pub fn respond<T: Serialize>(
    result: AppResult<T>,
    success_message: &str,
    failure_summary: &str,
) -> Response {
    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(data, success_message)),
        )
            .into_response(),
        Err(err) => failure(&err, failure_summary),
    }
}

/// Render an error as an enveloped failure response
pub fn failure(err: &AppError, summary: &str) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::<()>::failure(err.message.clone(), summary)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiResponse::success_with_message(42, "done");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert_eq!(json["message"], "done");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let envelope = ApiResponse::<()>::failure("boom", "Failed to generate diet plan");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert_eq!(json["message"], "Failed to generate diet plan");
        assert!(json.get("data").is_none());
    }
}
