//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait, used to implement pluggable
//! feedback strategies for failed submissions (template-based guidance,
//! authored hints, ...).
//!

use crate::error::ValidatorError;
use crate::types::{Submission, Verdict};

/// A trait for pluggable feedback strategies.
///
/// Implement this trait to define how a guidance message is produced for a
/// submission that did not pass.
///
/// # Arguments
/// - `submission`: the attempt being graded.
/// - `verdict`: the comparator's outcome for the attempt.
///
/// # Returns
/// - `Ok(String)`: the message to show the player.
/// - `Err(ValidatorError)`: if the strategy cannot produce a message.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        submission: &Submission,
        verdict: &Verdict,
    ) -> Result<String, ValidatorError>;
}
