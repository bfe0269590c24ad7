//! Arithmetic Context - Value Objects

use serde::Serialize;

use super::OperationError;

/// 操作数
///
/// 不变量:
/// - 布尔值无法构造为 Number
/// - Float 总是有限值（非 NaN、非 ±inf）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i128),
    Float(f64),
}

impl Number {
    /// 创建浮点操作数，拒绝非有限值
    pub fn float(value: f64) -> Result<Self, OperationError> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(OperationError::InvalidInput(
                "Input must be a finite number".to_string(),
            ))
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// 取整数值；浮点数（即使是整值）视为无效输入
    pub fn as_integer(&self) -> Result<i128, OperationError> {
        match *self {
            Self::Integer(n) => Ok(n),
            Self::Float(_) => Err(OperationError::InvalidInput(
                "Input must be an integer".to_string(),
            )),
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Integer(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl TryFrom<&serde_json::Value> for Number {
    type Error = OperationError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Bool(_) => Err(OperationError::InvalidInput(
                "Boolean values are not allowed".to_string(),
            )),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::from(u))
                } else {
                    n.as_f64()
                        .ok_or_else(|| {
                            OperationError::InvalidInput("Input must be a number".to_string())
                        })
                        .and_then(Self::float)
                }
            }
            _ => Err(OperationError::InvalidInput(
                "Input must be a number".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}
