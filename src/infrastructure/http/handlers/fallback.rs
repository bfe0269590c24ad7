//! Fallback Handlers

use axum::response::IntoResponse;

use crate::infrastructure::http::error::ApiError;

/// 未匹配路由
pub async fn not_found() -> impl IntoResponse {
    ApiError::NotFound
}
