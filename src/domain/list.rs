//! 数值列表运算

use std::cmp::Ordering;

use serde_json::Value;

use crate::domain::arithmetic::{Number, OperationError};

/// 数值比较：两个整数按整数比较（避免 i128 转 f64 的精度损失），否则按浮点比较
fn compare(a: &Number, b: &Number) -> Ordering {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x.cmp(y),
        _ => a.as_f64().total_cmp(&b.as_f64()),
    }
}

/// 稳定排序；`reverse` 为 true 时降序，相等元素保持原有顺序
pub fn sort_list(numbers: &[Number], reverse: bool) -> Vec<Number> {
    let mut sorted = numbers.to_vec();
    if reverse {
        sorted.sort_by(|a, b| compare(b, a));
    } else {
        sorted.sort_by(compare);
    }
    sorted
}

/// 从 JSON 值提取数值列表
///
/// 非数组返回 "Input must be a list"；任何元素不是数值（包括布尔值）返回
/// "List must contain only numbers"。
pub fn numbers_from_json(value: &Value) -> Result<Vec<Number>, OperationError> {
    let Value::Array(items) = value else {
        return Err(OperationError::InvalidInput("Input must be a list".to_string()));
    };

    items
        .iter()
        .map(|item| {
            Number::try_from(item).map_err(|_| {
                OperationError::InvalidInput("List must contain only numbers".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ints(values: &[i128]) -> Vec<Number> {
        values.iter().copied().map(Number::Integer).collect()
    }

    #[test]
    fn test_sort_ascending() {
        assert_eq!(sort_list(&ints(&[3, 1, 2]), false), ints(&[1, 2, 3]));
        assert_eq!(sort_list(&ints(&[-5, 10, 0, -7]), false), ints(&[-7, -5, 0, 10]));
        assert_eq!(sort_list(&[], false), Vec::<Number>::new());
    }

    #[test]
    fn test_sort_reverse() {
        assert_eq!(sort_list(&ints(&[3, 1, 2]), true), ints(&[3, 2, 1]));
    }

    #[test]
    fn test_sort_mixed_numbers() {
        let input = vec![Number::Float(2.5), Number::Integer(1), Number::Integer(3)];
        let expected = vec![Number::Integer(1), Number::Float(2.5), Number::Integer(3)];
        assert_eq!(sort_list(&input, false), expected);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let input = vec![Number::Float(1.0), Number::Integer(1), Number::Integer(0)];
        assert_eq!(
            sort_list(&input, false),
            vec![Number::Integer(0), Number::Float(1.0), Number::Integer(1)]
        );
        assert_eq!(
            sort_list(&input, true),
            vec![Number::Float(1.0), Number::Integer(1), Number::Integer(0)]
        );
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let big = i128::from(i64::MAX) * 4;
        assert_eq!(sort_list(&ints(&[big + 1, big]), false), ints(&[big, big + 1]));
    }

    #[test]
    fn test_numbers_from_json() {
        assert_eq!(
            numbers_from_json(&json!([3, 1.5, -2])).unwrap(),
            vec![Number::Integer(3), Number::Float(1.5), Number::Integer(-2)]
        );
        assert_eq!(numbers_from_json(&json!([])).unwrap(), Vec::<Number>::new());
    }

    #[test]
    fn test_numbers_from_json_rejects_wrong_types() {
        assert_eq!(
            numbers_from_json(&json!("1,2,3")),
            Err(OperationError::InvalidInput("Input must be a list".to_string()))
        );
        for bad in [json!([1, "2"]), json!([1, true]), json!([null])] {
            assert_eq!(
                numbers_from_json(&bad),
                Err(OperationError::InvalidInput(
                    "List must contain only numbers".to_string()
                ))
            );
        }
    }
}
