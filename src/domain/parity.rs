//! 奇偶性判断
//!
//! - 数值奇偶性：n 是否能被 2 整除
//! - 位奇偶性：|n| 的二进制表示中 1 的个数是否为偶数（与符号、位宽无关）

use serde::Serialize;

use crate::domain::arithmetic::{Number, OperationError};

/// 奇偶性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: i128) -> Self {
        if n & 1 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_even(n: Number) -> Result<bool, OperationError> {
    Ok(Parity::of(n.as_integer()?) == Parity::Even)
}

pub fn is_odd(n: Number) -> Result<bool, OperationError> {
    Ok(Parity::of(n.as_integer()?) == Parity::Odd)
}

/// 位奇偶性：`true` 表示置位数为偶数
///
/// 只统计绝对值的最小二进制表示，所以 `bit_parity(-n) == bit_parity(n)`，
/// 且 `bit_parity(0) == true`。
pub fn bit_parity(n: Number) -> Result<bool, OperationError> {
    let magnitude = n.as_integer()?.unsigned_abs();
    Ok(magnitude.count_ones() % 2 == 0)
}
