//! Request Parameter Validation
//!
//! 查询参数、路径参数与 JSON 请求体的提取。先检查是否缺失，再做数值转换；
//! 领域校验（如除零）只在所有参数转换成功之后进行。

use axum::{body::Bytes, extract::rejection::BytesRejection, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// 查询参数表，保留原始顺序；同名参数重复出现时取第一个
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn get(&self, name: &str) -> Option<&String> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 解析整数字面量：允许首尾空白和前导 `+`，超出 i64 范围视为无效
fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// 提取两个必需的整数参数（`a`、`b` 风格的二元端点）
pub fn require_integer_pair(
    params: &QueryParams,
    first: &str,
    second: &str,
) -> Result<(i64, i64), ApiError> {
    let (Some(raw_first), Some(raw_second)) = (params.get(first), params.get(second)) else {
        return Err(ApiError::MissingParameter(format!(
            "Parameters '{}' and '{}' are required",
            first, second
        )));
    };

    match (parse_integer(raw_first), parse_integer(raw_second)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ApiError::InvalidParameter(
            "Parameters must be valid integers".to_string(),
        )),
    }
}

/// 提取单个必需的整数参数
pub fn require_integer(params: &QueryParams, name: &str) -> Result<i64, ApiError> {
    let raw = params
        .get(name)
        .ok_or_else(|| ApiError::MissingParameter(format!("Parameter '{}' is required", name)))?;

    parse_integer(raw).ok_or_else(|| {
        ApiError::InvalidParameter("Parameter must be a valid integer".to_string())
    })
}

/// 提取必需的字符串参数（允许空串）
pub fn require_text<'a>(params: &'a QueryParams, name: &str) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ApiError::MissingParameter(format!("Parameter '{}' is required", name)))
}

/// 解析 JSON 请求体
///
/// 空白请求体返回 `None`；超出上限返回 413，非法 JSON 返回 400。
pub fn json_body(body: Result<Bytes, BytesRejection>) -> Result<Option<Value>, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(&body).map(Some).map_err(|e| {
        tracing::debug!(error = %e, "Malformed JSON body");
        ApiError::BadRequest("Request body must be valid JSON".to_string())
    })
}

/// 匹配路径中的非负整数字面量
///
/// 只接受非空的 ASCII 数字串；负数、小数、带符号或超出 u64 的值都不在路由语法内，
/// 返回 `NotFound` 而不是参数错误。
pub fn path_unsigned(segment: &str) -> Result<u64, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    segment.parse::<u64>().map_err(|_| ApiError::NotFound)
}
