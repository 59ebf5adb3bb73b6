//! A comparator that checks a submission for normalized equality with the
//! reference solution.
//!
//! The check is lenient toward whitespace, indentation, letter case, and
//! typographic quote style, all of which are erased by normalization, but
//! strict about every remaining character. Two snippets that differ only in
//! comments are NOT equal: comments are not stripped.

use crate::traits::comparator::SubmissionComparator;
use crate::types::{Submission, Verdict};
use crate::utilities::normalize::normalize_for_comparison;

/// Returns true iff the two snippets are equal after normalization.
///
/// Reflexive for any input, including the empty string.
pub fn is_exact_match(user_code: &str, correct_code: &str) -> bool {
    normalize_for_comparison(user_code) == normalize_for_comparison(correct_code)
}

/// All-or-nothing strategy: the submission passes only on a normalized match
/// with the correct snippet. Produces no per-fix detail.
pub struct ExactComparator;

impl SubmissionComparator for ExactComparator {
    fn compare(&self, submission: &Submission) -> Verdict {
        Verdict::plain(is_exact_match(
            &submission.user_code,
            &submission.correct_code,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        for code in ["", "x = 1", "def f():\n    return 1", "  spaced  "] {
            assert!(is_exact_match(code, code));
        }
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert!(is_exact_match("a\n  b", "a b"));
        assert!(is_exact_match("x=1", "x = 1"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_exact_match("Hello", "hello"));
    }

    #[test]
    fn test_quote_style_insensitive() {
        assert!(is_exact_match(
            "He said \u{201C}hi\u{201D}",
            "He said \"hi\""
        ));
        assert!(is_exact_match("it\u{2019}s", "it's"));
    }

    #[test]
    fn test_other_characters_strict() {
        assert!(!is_exact_match("x = 1", "x = 2"));
        assert!(!is_exact_match("print(x)", "print(y)"));
    }

    #[test]
    fn test_comments_not_stripped() {
        assert!(!is_exact_match("x = 1  # answer", "x = 1"));
    }

    #[test]
    fn test_comparator_verdict() {
        let submission = Submission::new("X = 1", "x = 2", "x = 1");
        let verdict = ExactComparator.compare(&submission);
        assert!(verdict.passed);
        assert!(verdict.matched_fixes.is_empty());
        assert!(verdict.missing_fixes.is_empty());

        let submission = Submission::new("x = 3", "x = 2", "x = 1");
        assert!(!ExactComparator.compare(&submission).passed);
    }
}
