//! Parity Handlers
//!
//! 路径参数只接受非负整数字面量，其余输入返回 404

use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};

use crate::domain::{bit_parity, is_even, is_odd, Number, Parity};
use crate::infrastructure::http::dto::{current_timestamp, OddEvenResponse, ParityResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::params::path_unsigned;

struct ParityCheck {
    input: u64,
    is_even: bool,
    is_odd: bool,
    parity: Parity,
    bit_parity: Parity,
}

/// 路径段无法解码（例如非 UTF-8）同样视为不在路由语法内
fn check(path: Result<Path<String>, PathRejection>) -> Result<ParityCheck, ApiError> {
    let Ok(Path(segment)) = path else {
        return Err(ApiError::NotFound);
    };
    let input = path_unsigned(&segment)?;
    let n = Number::from(input);

    let even = is_even(n)?;
    let odd = is_odd(n)?;
    let even_bits = bit_parity(n)?;

    Ok(ParityCheck {
        input,
        is_even: even,
        is_odd: odd,
        parity: parity_of(even),
        bit_parity: parity_of(even_bits),
    })
}

fn parity_of(even: bool) -> Parity {
    if even {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// GET /api/parity/:n
pub async fn parity(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ParityResponse>, ApiError> {
    let c = check(path)?;
    Ok(Json(ParityResponse {
        operation: "parity",
        input: c.input,
        is_even: c.is_even,
        is_odd: c.is_odd,
        parity: c.parity,
        bit_parity: c.bit_parity,
        timestamp: current_timestamp(),
    }))
}

/// GET /api/odd_even/:n（parity 的别名，字段名为 `status`）
pub async fn odd_even(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<OddEvenResponse>, ApiError> {
    let c = check(path)?;
    Ok(Json(OddEvenResponse {
        operation: "Odd/Even Check",
        input: c.input,
        is_even: c.is_even,
        is_odd: c.is_odd,
        status: c.parity,
        bit_parity: c.bit_parity,
        timestamp: current_timestamp(),
    }))
}
