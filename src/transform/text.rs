//! Whitespace, ordering and substring helpers.

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Reverse by code point. Combining sequences are not kept together.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Literal, global substring replacement.
pub fn replace(text: &str, substring: &str, replacement: &str) -> String {
    text.replace(substring, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_unicode_whitespace() {
        assert_eq!(trim("  padded\t\n"), "padded");
        assert_eq!(trim("\u{2003}em space\u{00a0}"), "em space");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn reverse_by_code_point() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("привет"), "тевирп");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn replace_is_literal_not_regex() {
        assert_eq!(replace("a.b.c", ".", "-"), "a-b-c");
        assert_eq!(replace("a+b", "a+", ""), "b");
        assert_eq!(replace("foo bar foo", "foo", "baz"), "baz bar baz");
    }

    #[test]
    fn replace_without_match_is_unchanged() {
        assert_eq!(replace("hello", "xyz", "!"), "hello");
    }
}
