//! A comparator that awards a pass based on the presence of extracted key
//! fixes, independent of (and looser than) the exact comparator.
//!
//! Each fix extracted from the buggy/correct diff must appear in the
//! submission as a literal substring, with a lower-cased comparison as a
//! fallback. The point is to name *which* required edits are absent even when
//! the player has taken a different but potentially valid path.

use crate::extractors::key_fix_extractor::extract_key_fixes;
use crate::traits::comparator::SubmissionComparator;
use crate::types::{PartialCreditResult, Submission, Verdict};

/// Checks whether the submission contains every key fix extracted from the
/// buggy/correct diff.
///
/// A fix is satisfied iff `user_code` contains its `fixed` text literally, or
/// the lower-cased submission contains the lower-cased `fixed` text. Fix
/// texts are matched as plain substrings; characters that are special in
/// regular expressions carry no meaning here.
///
/// `is_valid` is true iff no fix is missing, vacuously true when the
/// extraction produced no fixes at all.
pub fn check_partial_credit(
    user_code: &str,
    buggy_code: &str,
    correct_code: &str,
) -> PartialCreditResult {
    let fixes = extract_key_fixes(buggy_code, correct_code);
    let user_lower = user_code.to_lowercase();

    let mut missing_fixes = Vec::new();
    for fix in &fixes {
        let satisfied =
            user_code.contains(&fix.fixed) || user_lower.contains(&fix.fixed.to_lowercase());
        if !satisfied {
            missing_fixes.push(fix.description.clone());
        }
    }

    PartialCreditResult {
        is_valid: missing_fixes.is_empty(),
        missing_fixes,
    }
}

/// Partial-credit strategy: passes when every extracted key fix is present in
/// the submission. The verdict records which fixes matched and which are
/// missing, by description.
pub struct KeyFixComparator;

impl SubmissionComparator for KeyFixComparator {
    fn compare(&self, submission: &Submission) -> Verdict {
        let fixes = extract_key_fixes(&submission.buggy_code, &submission.correct_code);
        let user_lower = submission.user_code.to_lowercase();

        let mut matched_fixes = Vec::new();
        let mut missing_fixes = Vec::new();
        for fix in &fixes {
            let satisfied = submission.user_code.contains(&fix.fixed)
                || user_lower.contains(&fix.fixed.to_lowercase());
            if satisfied {
                matched_fixes.push(fix.description.clone());
            } else {
                missing_fixes.push(fix.description.clone());
            }
        }

        Verdict {
            passed: missing_fixes.is_empty(),
            matched_fixes,
            missing_fixes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUGGY: &str = "def greet(name)\n    return name";
    const CORRECT: &str = "def greet(name):\n    return name";

    #[test]
    fn test_pass_when_fix_present() {
        let result = check_partial_credit("def greet(name):\n    return name", BUGGY, CORRECT);
        assert!(result.is_valid);
        assert!(result.missing_fixes.is_empty());
    }

    #[test]
    fn test_missing_fix_reported_by_description() {
        let result = check_partial_credit("def greet(name)\n    return name", BUGGY, CORRECT);
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_fixes,
            vec!["Add colon after function definition"]
        );
    }

    #[test]
    fn test_case_insensitive_fallback() {
        // The required token is "message"; the submission has "MESSAGE".
        let result = check_partial_credit(
            "console.log(MESSAGE);",
            "console.log(mesage);",
            "console.log(message);",
        );
        assert!(result.is_valid);
    }

    #[test]
    fn test_vacuously_valid_with_no_extracted_fixes() {
        // Identical snippets extract nothing, so any submission passes the
        // lenient check, even an empty one.
        let result = check_partial_credit("", "x = 1", "x = 1");
        assert!(result.is_valid);
        assert!(result.missing_fixes.is_empty());
    }

    #[test]
    fn test_regex_special_chars_are_literal() {
        // The extracted fix "):"  contains regex metacharacters; it must be
        // matched as plain text.
        let result = check_partial_credit("def f():", "def f(\n    pass", "def f():\n    pass");
        assert!(result.is_valid);
    }

    #[test]
    fn test_comparator_splits_matched_and_missing() {
        let buggy = "if x:\nprint(x)";
        let correct = "if x:\n    print(result);";
        let submission = Submission::new("if x:\n    print(result)", buggy, correct);
        let verdict = KeyFixComparator.compare(&submission);
        // Indentation fix "    print(result);" is absent (no semicolon in the
        // submission), the semicolon fix is absent, "result" is present.
        assert!(!verdict.passed);
        assert_eq!(
            verdict.matched_fixes,
            vec!["Use correct variable name: result"]
        );
        assert_eq!(
            verdict.missing_fixes,
            vec!["Fix indentation", "Add semicolons"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let result = check_partial_credit("", "", "");
        assert!(result.is_valid);
    }
}
