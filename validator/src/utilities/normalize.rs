//! Snippet normalization for comparison.
//!
//! Two transforms live here. [`normalize_for_comparison`] is the full form used
//! by the strict equality check: it erases whitespace, folds case, and maps
//! typographic quotes to their ASCII equivalents, so that formatting and
//! quote-style differences never fail a correct submission. The output is only
//! ever compared, never displayed.
//!
//! [`strip_whitespace`] is the lighter form used by the feedback composer's
//! "did they change anything at all" check: whitespace removal only, with case
//! and quotes left intact.

/// Normalizes a snippet for equality comparison.
///
/// Applied in order: trim, remove every whitespace character, replace curly
/// double quotes with `"`, replace curly single quotes and apostrophe variants
/// with `'`, lowercase.
///
/// The transform is pure, deterministic, and idempotent; it never fails, for
/// any input including the empty string.
pub fn normalize_for_comparison(code: &str) -> String {
    code.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trims and removes all whitespace, leaving case and quote style untouched.
pub fn strip_whitespace(code: &str) -> String {
    code.trim().chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_all_whitespace() {
        assert_eq!(normalize_for_comparison("a\n  b\tc\r\nd"), "abcd");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_for_comparison("Hello World"), "helloworld");
    }

    #[test]
    fn test_normalizes_curly_double_quotes() {
        assert_eq!(
            normalize_for_comparison("say \u{201C}hi\u{201D}"),
            "say\"hi\""
        );
    }

    #[test]
    fn test_normalizes_curly_single_quotes() {
        assert_eq!(
            normalize_for_comparison("it\u{2019}s \u{2018}ok\u{2019}"),
            "it's'ok'"
        );
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_for_comparison(""), "");
        assert_eq!(normalize_for_comparison("   \n\t  "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "",
            "  def greet(name):\n    return name  ",
            "It\u{2019}s \u{201C}Fine\u{201D}",
            "MIXED case\twith\nwhitespace",
            "ümlaut STRAßE",
        ] {
            let once = normalize_for_comparison(input);
            assert_eq!(normalize_for_comparison(&once), once);
        }
    }

    #[test]
    fn test_strip_whitespace_keeps_case_and_quotes() {
        assert_eq!(
            strip_whitespace("X = \u{201C}Hi\u{201D}\n"),
            "X=\u{201C}Hi\u{201D}"
        );
    }

    #[test]
    fn test_strip_whitespace_empty() {
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace(" \t "), "");
    }
}
