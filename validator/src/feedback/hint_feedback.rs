//! Hint feedback strategy: surfaces the hints an instructor authored for the
//! challenge, one per failed attempt, in order.
//!
//! Once every authored hint has been revealed, the strategy falls back to the
//! automatic similarity-driven message table, so the player always gets
//! something actionable back.

use crate::error::ValidatorError;
use crate::feedback::auto_feedback::compose_feedback;
use crate::traits::feedback::Feedback;
use crate::types::{Submission, Verdict};

pub struct HintFeedback {
    hints: Vec<String>,
    /// How many hints the player has already seen.
    hints_used: usize,
}

impl HintFeedback {
    pub fn new(hints: Vec<String>, hints_used: usize) -> Self {
        Self { hints, hints_used }
    }
}

impl Feedback for HintFeedback {
    fn assemble_feedback(
        &self,
        submission: &Submission,
        _verdict: &Verdict,
    ) -> Result<String, ValidatorError> {
        if self.hints.is_empty() {
            return Err(ValidatorError::MissingHints(
                "hint feedback requested but the challenge has no authored hints".to_string(),
            ));
        }

        match self.hints.get(self.hints_used) {
            Some(hint) => Ok(hint.clone()),
            None => Ok(compose_feedback(
                &submission.user_code,
                &submission.buggy_code,
                &submission.correct_code,
            )),
        }
    }
}
