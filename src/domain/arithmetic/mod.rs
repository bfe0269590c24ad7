//! Arithmetic Context - 算术运算上下文
//!
//! 职责:
//! - 操作数类型（整数 / 有限浮点数，布尔值在构造上被排除）
//! - 四则运算、平方、绝对值

mod errors;
mod operations;
mod value_objects;

pub use errors::OperationError;
pub use operations::{
    absolute_value, add, divide, multiply, square, subtract, BinaryOperation, UnaryOperation,
};
pub use value_objects::Number;
