//! Error types shared by the links service and the Slack bot.
//!
//! [`ApiError`] is the wire payload: the links service answers every failed
//! request with it and the bot decodes it when an exchange fails.
//! [`AppError`] is the service-side error; its HTTP conversion runs through
//! the exception-logging interceptor.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interceptor::{ExceptionLogger, LoggedArg, MethodCall};

/// Internal error codes reported in [`ApiError::code`].
pub mod codes {
    pub const BAD_REQUEST: &str = "LKS-F1-D1";
    pub const NOT_FOUND: &str = "LKS-F1-D2";
    pub const INTERNAL: &str = "LKS-F2-D1";
}

/// Structured error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Internal error code, e.g. `LKS-F1-D1`.
    pub code: String,
    /// Message meant for the end user.
    pub message: String,
    /// Short title of the failure.
    pub title: String,
    /// What exactly went wrong.
    pub detail: String,
    /// Per-field validation failures, `field: reason`.
    #[serde(default)]
    pub field_errors: Vec<String>,
}

impl ApiError {
    pub fn new(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        field_errors: Vec<String>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            title: title.into(),
            detail: detail.into(),
            field_errors,
        }
    }

    /// One-line summary used in log lines: `message (code): detail`.
    pub fn detail_message(&self) -> String {
        format!("{} ({}): {}", self.message, self.code, self.detail)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.title, self.message)
    }
}

/// Links service error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: Vec<String>,
    },
    #[error("{message}")]
    NotFound { message: String, detail: String },
    #[error("{message}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, field_errors: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors,
        }
    }

    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its wire payload.
    pub fn to_api_error(&self) -> ApiError {
        let status = self.status_code().as_u16();
        match self {
            Self::Validation {
                message,
                field_errors,
            } => {
                let detail = if field_errors.is_empty() {
                    message.clone()
                } else {
                    field_errors.join("; ")
                };
                ApiError::new(
                    status,
                    codes::BAD_REQUEST,
                    message,
                    "Bad request",
                    detail,
                    field_errors.clone(),
                )
            }
            Self::NotFound { message, detail } => ApiError::new(
                status,
                codes::NOT_FOUND,
                message,
                "Not found",
                detail,
                Vec::new(),
            ),
            Self::Internal { message, detail } => ApiError::new(
                status,
                codes::INTERNAL,
                message,
                "Internal error",
                detail,
                Vec::new(),
            ),
        }
    }
}

impl LoggedArg for AppError {
    fn detail_message(&self) -> Option<String> {
        Some(self.to_api_error().detail_message())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, reason)
                })
            })
            .collect();
        field_errors.sort();

        AppError::bad_request("Validation failed", field_errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed request body",
            vec![format!("body: {}", rejection.body_text())],
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ExceptionLogger::tracing().log_exception_handle_methods(MethodCall::new(
            "ApiExceptionHandler.handle_app_error(..)",
            vec![&self as &dyn LoggedArg],
            || handle_app_error(&self),
        ))
    }
}

fn handle_app_error(error: &AppError) -> Response {
    (error.status_code(), Json(error.to_api_error())).into_response()
}
