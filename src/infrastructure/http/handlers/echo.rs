//! Echo Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query},
    Json,
};
use serde_json::Value;

use crate::infrastructure::http::dto::{current_timestamp, EchoResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::params::{json_body, QueryParams};

fn echo_response(message: Value) -> Json<EchoResponse> {
    Json(EchoResponse {
        operation: "echo",
        message,
        timestamp: current_timestamp(),
    })
}

/// GET /api/echo?message=，缺省为空字符串
pub async fn echo_query(Query(params): Query<QueryParams>) -> Json<EchoResponse> {
    let message = params.get("message").cloned().unwrap_or_default();
    echo_response(Value::String(message))
}

/// POST /api/echo，原样返回 JSON 请求体中的 `message` 字段
///
/// 空请求体、非对象请求体或缺少字段时返回空字符串；非法 JSON 返回 400，
/// 超出请求体上限返回 413。
pub async fn echo_body(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<EchoResponse>, ApiError> {
    let message = match json_body(body)? {
        Some(Value::Object(mut map)) => map
            .remove("message")
            .unwrap_or_else(|| Value::String(String::new())),
        _ => Value::String(String::new()),
    };

    Ok(echo_response(message))
}
