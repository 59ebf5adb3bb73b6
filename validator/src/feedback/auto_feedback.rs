//! # AutoFeedback Strategy
//!
//! Template-based guidance for a failed submission, driven by how similar the
//! attempt is to the reference solution.
//!
//! The decision table is a fixed contract: an unchanged submission gets the
//! "no changes yet" nudge; otherwise similarity above 0.9 means a near-miss,
//! above 0.7 means the right track, anything lower gets pointed at the hints.
//! The thresholds and the four message strings are exact. Presentation layers
//! string-match on them.

use crate::error::ValidatorError;
use crate::scorer::similarity_score;
use crate::traits::feedback::Feedback;
use crate::types::{Submission, Verdict};
use crate::utilities::normalize::strip_whitespace;

pub const NO_CHANGES_MESSAGE: &str = "You haven't made any changes yet. Try fixing the error!";
pub const VERY_CLOSE_MESSAGE: &str = "You're very close! Check for small syntax differences.";
pub const RIGHT_TRACK_MESSAGE: &str = "You're on the right track! Review the error message again.";
pub const KEEP_TRYING_MESSAGE: &str = "Keep trying! Use a hint if you're stuck.";

/// Composes the guidance message for a submission.
///
/// Comparison happens on whitespace-stripped text only; case and quote style
/// are left alone here, so "did they change anything" reflects what the
/// player actually typed.
pub fn compose_feedback(user_code: &str, buggy_code: &str, correct_code: &str) -> String {
    let user = strip_whitespace(user_code);
    let buggy = strip_whitespace(buggy_code);

    if user == buggy {
        return NO_CHANGES_MESSAGE.to_string();
    }

    let correct = strip_whitespace(correct_code);
    let similarity = similarity_score(&user, &correct);
    if similarity > 0.9 {
        VERY_CLOSE_MESSAGE.to_string()
    } else if similarity > 0.7 {
        RIGHT_TRACK_MESSAGE.to_string()
    } else {
        KEEP_TRYING_MESSAGE.to_string()
    }
}

/// Automatic feedback strategy: the fixed similarity-driven message table.
#[derive(Debug)]
pub struct AutoFeedback;

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        submission: &Submission,
        _verdict: &Verdict,
    ) -> Result<String, ValidatorError> {
        Ok(compose_feedback(
            &submission.user_code,
            &submission.buggy_code,
            &submission.correct_code,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUGGY: &str = "numbers = [1, 2, 3, 4, 5]\nfor i in range(6):\n    print(numbers[i])";
    const CORRECT: &str = "numbers = [1, 2, 3, 4, 5]\nfor i in range(5):\n    print(numbers[i])";

    #[test]
    fn test_unchanged_submission() {
        assert_eq!(compose_feedback(BUGGY, BUGGY, CORRECT), NO_CHANGES_MESSAGE);
    }

    #[test]
    fn test_unchanged_up_to_whitespace() {
        // Reformatting without editing still counts as "no changes".
        let reformatted = BUGGY.replace('\n', "  \n\t");
        assert_eq!(
            compose_feedback(&reformatted, BUGGY, CORRECT),
            NO_CHANGES_MESSAGE
        );
    }

    #[test]
    fn test_single_letter_change_is_very_close() {
        // One substituted character against a long reference.
        let near = CORRECT.replace("print", "primt");
        assert_eq!(compose_feedback(&near, BUGGY, CORRECT), VERY_CLOSE_MESSAGE);
    }

    #[test]
    fn test_partial_progress_is_right_track() {
        // Around three quarters of the solution present.
        let partial = "numbers = [1, 2, 3, 4, 5]\nfor i in range(5):\n    print";
        assert_eq!(
            compose_feedback(partial, BUGGY, CORRECT),
            RIGHT_TRACK_MESSAGE
        );
    }

    #[test]
    fn test_unrelated_submission_keeps_trying() {
        assert_eq!(
            compose_feedback("hello world", BUGGY, CORRECT),
            KEEP_TRYING_MESSAGE
        );
    }

    #[test]
    fn test_empty_everything() {
        // Empty user equals empty buggy: the no-changes branch wins.
        assert_eq!(compose_feedback("", "", ""), NO_CHANGES_MESSAGE);
    }

    #[test]
    fn test_strategy_delegates_to_table() {
        let submission = Submission::new("hello world", BUGGY, CORRECT);
        let message = AutoFeedback
            .assemble_feedback(&submission, &Verdict::plain(false))
            .unwrap();
        assert_eq!(message, KEEP_TRYING_MESSAGE);
    }
}
