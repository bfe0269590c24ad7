//! Data Transfer Objects

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{Number, Parity};

/// 当前 UTC 时间，ISO-8601 格式（微秒精度，`+00:00` 偏移）
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

// ============================================================================
// Health / Info
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub message: &'static str,
    pub environment: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

/// 端点支持的 HTTP 方法：单个方法序列化为字符串，多个方法序列化为数组
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EndpointMethods {
    One(&'static str),
    Many(&'static [&'static str]),
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: EndpointMethods,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub version: &'static str,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
    pub timestamp: String,
}

// ============================================================================
// Arithmetic
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BinaryOperationResponse {
    pub operation: &'static str,
    pub a: i64,
    pub b: i64,
    pub result: Number,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct UnaryOperationResponse {
    pub operation: &'static str,
    pub input: i64,
    pub result: Number,
    pub timestamp: String,
}

// ============================================================================
// Parity
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ParityResponse {
    pub operation: &'static str,
    pub input: u64,
    pub is_even: bool,
    pub is_odd: bool,
    pub parity: Parity,
    pub bit_parity: Parity,
    pub timestamp: String,
}

/// `/api/odd_even` 的响应，字段 `status` 对应 `parity`
#[derive(Debug, Serialize)]
pub struct OddEvenResponse {
    pub operation: &'static str,
    pub input: u64,
    pub is_even: bool,
    pub is_odd: bool,
    pub status: Parity,
    pub bit_parity: Parity,
    pub timestamp: String,
}

// ============================================================================
// Echo
// ============================================================================

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub operation: &'static str,
    pub message: serde_json::Value,
    pub timestamp: String,
}

// ============================================================================
// Text / List
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PalindromeResponse {
    pub operation: &'static str,
    pub input: String,
    pub result: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    pub operation: &'static str,
    pub input: String,
    pub result: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub operation: &'static str,
    pub input: Vec<Number>,
    pub reverse: bool,
    pub result: Vec<Number>,
    pub timestamp: String,
}
