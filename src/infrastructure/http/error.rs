//! HTTP Error Handling
//!
//! 两种错误响应格式:
//! - 参数/运算错误 (400): `{"error": "..."}`
//! - 路由级错误 (404/405/413/500): `{"error", "status", "message", "timestamp"}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::dto::current_timestamp;
use crate::domain::OperationError;

/// 参数校验错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 路由级错误响应
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
    pub status: u16,
    pub message: String,
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            status: status.as_u16(),
            message: message.into(),
            timestamp: current_timestamp(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Endpoint not found",
            "The requested endpoint does not exist",
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
            "The HTTP method is not allowed for this endpoint",
        )
    }

    pub fn payload_too_large() -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Payload too large",
            "The request body exceeds the configured size limit",
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            message,
        )
    }
}

pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 缺少必需参数
    MissingParameter(String),
    /// 参数无法解析为整数
    InvalidParameter(String),
    /// 领域运算失败
    Operation(OperationError),
    /// 其他请求格式错误
    BadRequest(String),
    NotFound,
    MethodNotAllowed,
    /// 请求体超出上限
    PayloadTooLarge,
    Internal(String),
}

impl From<OperationError> for ApiError {
    fn from(e: OperationError) -> Self {
        ApiError::Operation(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParameter(msg)
            | ApiError::InvalidParameter(msg)
            | ApiError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Operation(e) => {
                tracing::debug!(error = %e, "Operation rejected");
                let msg = match e {
                    OperationError::InvalidInput(msg) => msg,
                    other => other.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::NotFound => ErrorEnvelope::not_found().into_response(),
            ApiError::MethodNotAllowed => ErrorEnvelope::method_not_allowed().into_response(),
            ApiError::PayloadTooLarge => ErrorEnvelope::payload_too_large().into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ErrorEnvelope::internal(INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}
