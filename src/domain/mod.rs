//! Domain Layer - 领域层
//!
//! 纯函数运算，无 I/O、无共享状态:
//! - Arithmetic Context: 操作数与算术运算
//! - Parity: 数值奇偶性与位奇偶性
//! - Text: 回文判断、字符串反转
//! - List: 数值列表排序

pub mod arithmetic;
pub mod list;
pub mod parity;
pub mod text;

pub use arithmetic::{BinaryOperation, Number, OperationError, UnaryOperation};
pub use list::{numbers_from_json, sort_list};
pub use parity::{bit_parity, is_even, is_odd, Parity};
pub use text::{is_palindrome, reverse_string};
