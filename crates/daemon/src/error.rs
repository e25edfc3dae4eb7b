// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_core::CoreError;
use apprunner_supervisor::SupervisorError;
use apprunner_vm::VmError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Maps crate-local errors onto the HTTP taxonomy: each library
/// crate's own error enum is translated here, at the one place that knows
/// about status codes and response bodies.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: String::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<SupervisorError> for ApiError {
    fn from(err: SupervisorError) -> Self {
        match err {
            SupervisorError::PackageNotFound => ApiError {
                status: StatusCode::NOT_FOUND,
                message: "package not found".to_string(),
            },
            SupervisorError::Marshal(VmError::ArgsNotArray) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: "arguments should be in array".to_string(),
            },
            SupervisorError::Marshal(VmError::InvalidRequest) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: "invalid request".to_string(),
            },
            SupervisorError::Marshal(VmError::Script(message)) => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
            SupervisorError::Registry(CoreError::AppNotFound) => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "app not found".to_string(),
            },
        }
    }
}
