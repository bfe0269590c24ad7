//! 算术运算
//!
//! 所有运算都是纯函数：整数运算使用 checked 算术，整数与浮点混合时结果为浮点。

use super::{Number, OperationError};

/// 二元运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperation {
    /// 响应中使用的运算名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    pub fn apply(&self, a: Number, b: Number) -> Result<Number, OperationError> {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
            Self::Divide => divide(a, b).map(Number::Float),
        }
    }
}

/// 一元运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperation {
    Square,
    AbsoluteValue,
}

impl UnaryOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::AbsoluteValue => "absolute_value",
        }
    }

    pub fn apply(&self, n: Number) -> Result<Number, OperationError> {
        match self {
            Self::Square => square(n),
            Self::AbsoluteValue => absolute_value(n),
        }
    }
}

fn finite(value: f64) -> Result<Number, OperationError> {
    Number::float(value).map_err(|_| OperationError::Overflow)
}

fn combine(
    a: Number,
    b: Number,
    int_op: fn(i128, i128) -> Option<i128>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, OperationError> {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => int_op(x, y)
            .map(Number::Integer)
            .ok_or(OperationError::Overflow),
        _ => finite(float_op(a.as_f64(), b.as_f64())),
    }
}

pub fn add(a: Number, b: Number) -> Result<Number, OperationError> {
    combine(a, b, i128::checked_add, |x, y| x + y)
}

pub fn subtract(a: Number, b: Number) -> Result<Number, OperationError> {
    combine(a, b, i128::checked_sub, |x, y| x - y)
}

pub fn multiply(a: Number, b: Number) -> Result<Number, OperationError> {
    combine(a, b, i128::checked_mul, |x, y| x * y)
}

/// 除法，结果总是浮点数
///
/// 除数为 0（含 -0.0）时返回 `DivisionByZero`
pub fn divide(a: Number, b: Number) -> Result<f64, OperationError> {
    if b.is_zero() {
        return Err(OperationError::DivisionByZero);
    }
    let quotient = a.as_f64() / b.as_f64();
    if quotient.is_finite() {
        Ok(quotient)
    } else {
        Err(OperationError::Overflow)
    }
}

pub fn square(n: Number) -> Result<Number, OperationError> {
    multiply(n, n)
}

pub fn absolute_value(n: Number) -> Result<Number, OperationError> {
    match n {
        Number::Integer(x) => x
            .checked_abs()
            .map(Number::Integer)
            .ok_or(OperationError::Overflow),
        Number::Float(x) => Ok(Number::Float(x.abs())),
    }
}
