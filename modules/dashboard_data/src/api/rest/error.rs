//! HTTP error mapping to JSON error bodies

use crate::contract::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by REST handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invoice_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Invoice not found.")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Every domain failure is a server error carrying its fixed message
impl From<DashboardError> for ApiError {
    fn from(error: DashboardError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    }
}
