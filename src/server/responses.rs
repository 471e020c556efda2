// ABOUTME: JSON bodies returned by the HTTP surface.
// ABOUTME: Container list entries and the mapping from HealthError to status codes.

use crate::health::{HealthError, display_name};
use crate::runtime::ContainerSummary;
use crate::types::ContainerId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// One entry of `GET /api/containers`.
///
/// `health_status` is the runtime's free-form status string; the full health
/// block is only fetched by the single-container endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerView {
    pub id: ContainerId,
    pub name: String,
    pub state: String,
    pub health_status: String,
}

impl From<ContainerSummary> for ContainerView {
    fn from(summary: ContainerSummary) -> Self {
        let name = summary
            .names
            .first()
            .map(|n| display_name(n).to_string())
            .unwrap_or_default();

        Self {
            id: summary.id,
            name,
            state: summary.state,
            health_status: summary.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A `HealthError` rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub HealthError);

impl From<HealthError> for ApiError {
    fn from(err: HealthError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_unavailable() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::NOT_FOUND
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.0.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
