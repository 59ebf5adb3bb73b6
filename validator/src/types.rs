//! # Types Module
//!
//! This module defines the core data structures used throughout the validator:
//! the submission under test, the heuristic key fixes extracted from a
//! challenge, and the verdicts the comparison strategies produce.

/// One graded attempt: the player's edited code together with the challenge
/// snippets it is judged against.
///
/// All three fields are opaque text; no structural parsing is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The code as the player submitted it.
    pub user_code: String,
    /// The buggy snippet the player started from.
    pub buggy_code: String,
    /// The reference solution.
    pub correct_code: String,
}

impl Submission {
    pub fn new(
        user_code: impl Into<String>,
        buggy_code: impl Into<String>,
        correct_code: impl Into<String>,
    ) -> Self {
        Self {
            user_code: user_code.into(),
            buggy_code: buggy_code.into(),
            correct_code: correct_code.into(),
        }
    }
}

/// One atomic required edit inferred from the diff between a buggy and a
/// correct snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFix {
    /// The literal text the submission must contain for this fix to count.
    pub fixed: String,
    /// Human-readable description of the edit, shown when the fix is missing.
    pub description: String,
}

/// Result of the lenient partial-credit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialCreditResult {
    /// True iff every extracted key fix is present in the submission.
    /// Vacuously true when no fixes were extracted.
    pub is_valid: bool,
    /// Descriptions of the key fixes the submission is missing.
    pub missing_fixes: Vec<String>,
}

/// The outcome a comparison strategy produces for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the submission passes under this strategy.
    pub passed: bool,
    /// Descriptions of the key fixes found in the submission.
    pub matched_fixes: Vec<String>,
    /// Descriptions of the key fixes absent from the submission.
    pub missing_fixes: Vec<String>,
}

impl Verdict {
    /// A pass/fail verdict with no per-fix detail, as produced by the strict
    /// comparator.
    pub fn plain(passed: bool) -> Self {
        Self {
            passed,
            matched_fixes: Vec::new(),
            missing_fixes: Vec::new(),
        }
    }
}
