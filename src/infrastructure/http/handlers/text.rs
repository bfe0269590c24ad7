//! Text / List Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query},
    Json,
};
use serde_json::Value;

use crate::domain::{is_palindrome, numbers_from_json, reverse_string, sort_list};
use crate::infrastructure::http::dto::{
    current_timestamp, PalindromeResponse, ReverseResponse, SortResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::params::{json_body, require_text, QueryParams};

/// GET /api/palindrome?text=
pub async fn palindrome(
    Query(params): Query<QueryParams>,
) -> Result<Json<PalindromeResponse>, ApiError> {
    let text = require_text(&params, "text")?;

    Ok(Json(PalindromeResponse {
        operation: "palindrome",
        input: text.to_string(),
        result: is_palindrome(text),
        timestamp: current_timestamp(),
    }))
}

/// GET /api/reverse?text=
pub async fn reverse(
    Query(params): Query<QueryParams>,
) -> Result<Json<ReverseResponse>, ApiError> {
    let text = require_text(&params, "text")?;

    Ok(Json(ReverseResponse {
        operation: "reverse",
        input: text.to_string(),
        result: reverse_string(text),
        timestamp: current_timestamp(),
    }))
}

/// POST /api/sort，请求体 `{"numbers": [...], "reverse": false}`
///
/// `reverse` 可省略，缺省升序。
pub async fn sort(body: Result<Bytes, BytesRejection>) -> Result<Json<SortResponse>, ApiError> {
    let Some(Value::Object(body)) = json_body(body)? else {
        return Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let numbers = body
        .get("numbers")
        .ok_or_else(|| ApiError::MissingParameter("Field 'numbers' is required".to_string()))?;
    let numbers = numbers_from_json(numbers)?;

    let reverse = match body.get("reverse") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            return Err(ApiError::InvalidParameter(
                "Field 'reverse' must be a boolean".to_string(),
            ))
        }
    };

    let result = sort_list(&numbers, reverse);
    tracing::debug!(count = numbers.len(), reverse, "Sorted list");

    Ok(Json(SortResponse {
        operation: "sort",
        input: numbers,
        reverse,
        result,
        timestamp: current_timestamp(),
    }))
}
