//! 字符串运算

/// 回文判断：忽略大小写，只比较字母和数字
///
/// 空串（或不含字母数字的串）视为回文。
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// 按字符反转字符串
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome("madam"));
        assert!(is_palindrome("Racecar"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("No 'x' in Nixon"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("12345"));
    }

    #[test]
    fn test_palindrome_trivial_inputs() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("!!! ,,,"));
    }

    #[test]
    fn test_palindrome_unicode() {
        assert!(is_palindrome("上海自来水来自海上"));
        assert!(is_palindrome("Ésé"));
    }

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a b"), "b a");
        assert_eq!(reverse_string("你好"), "好你");
    }
}
