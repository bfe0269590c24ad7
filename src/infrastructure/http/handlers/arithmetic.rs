//! Arithmetic Handlers
//!
//! 所有二元/一元端点共用同一套流程：提取参数 → 整数转换 → 领域运算 → 响应

use axum::{extract::Query, Json};

use crate::domain::{BinaryOperation, Number, UnaryOperation};
use crate::infrastructure::http::dto::{
    current_timestamp, BinaryOperationResponse, UnaryOperationResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::params::{require_integer, require_integer_pair, QueryParams};

fn evaluate_binary(
    operation: BinaryOperation,
    params: &QueryParams,
) -> Result<Json<BinaryOperationResponse>, ApiError> {
    let (a, b) = require_integer_pair(params, "a", "b")?;
    let result = operation.apply(Number::from(a), Number::from(b))?;

    tracing::debug!(operation = operation.name(), a, b, %result, "Evaluated");

    Ok(Json(BinaryOperationResponse {
        operation: operation.name(),
        a,
        b,
        result,
        timestamp: current_timestamp(),
    }))
}

fn evaluate_unary(
    operation: UnaryOperation,
    params: &QueryParams,
) -> Result<Json<UnaryOperationResponse>, ApiError> {
    let n = require_integer(params, "n")?;
    let result = operation.apply(Number::from(n))?;

    tracing::debug!(operation = operation.name(), n, %result, "Evaluated");

    Ok(Json(UnaryOperationResponse {
        operation: operation.name(),
        input: n,
        result,
        timestamp: current_timestamp(),
    }))
}

/// GET /api/add?a=&b=
pub async fn add(
    Query(params): Query<QueryParams>,
) -> Result<Json<BinaryOperationResponse>, ApiError> {
    evaluate_binary(BinaryOperation::Add, &params)
}

/// GET /api/subtract?a=&b=
pub async fn subtract(
    Query(params): Query<QueryParams>,
) -> Result<Json<BinaryOperationResponse>, ApiError> {
    evaluate_binary(BinaryOperation::Subtract, &params)
}

/// GET /api/multiply?a=&b=
pub async fn multiply(
    Query(params): Query<QueryParams>,
) -> Result<Json<BinaryOperationResponse>, ApiError> {
    evaluate_binary(BinaryOperation::Multiply, &params)
}

/// GET /api/divide?a=&b=，结果为浮点数
pub async fn divide(
    Query(params): Query<QueryParams>,
) -> Result<Json<BinaryOperationResponse>, ApiError> {
    evaluate_binary(BinaryOperation::Divide, &params)
}

/// GET /api/square?n=
pub async fn square(
    Query(params): Query<QueryParams>,
) -> Result<Json<UnaryOperationResponse>, ApiError> {
    evaluate_unary(UnaryOperation::Square, &params)
}

/// GET /api/abs?n=
pub async fn absolute_value(
    Query(params): Query<QueryParams>,
) -> Result<Json<UnaryOperationResponse>, ApiError> {
    evaluate_unary(UnaryOperation::AbsoluteValue, &params)
}
