//! # Validator Library
//!
//! This crate provides the core logic for grading "debug the code" puzzle
//! submissions. A submission is judged against the challenge's buggy and
//! correct snippets three independent ways: a strict normalized-equality
//! check, a lenient key-fix presence check, and a similarity score that
//! drives a guidance message. All three are pure, synchronous functions over
//! the input strings: no I/O, no shared state, total over arbitrary input.
//!
//! ## Key Concepts
//! - **ValidationJob**: the main struct representing the grading of a single
//!   submission.
//! - **Comparators**: pluggable strategies for judging submissions (exact,
//!   key-fixes).
//! - **Feedback**: pluggable guidance generation for failed attempts (auto,
//!   hints).
//! - **Reports**: a structured, serializable summary of one attempt.
//!
//! The six underlying operations are also exported as free functions for
//! callers that want the pieces without the job plumbing:
//! [`normalize_for_comparison`], [`is_exact_match`], [`extract_key_fixes`],
//! [`check_partial_credit`], [`similarity_score`], and [`compose_feedback`].

pub mod comparators;
pub mod error;
pub mod extractors;
pub mod feedback;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

pub use comparators::exact_comparator::is_exact_match;
pub use comparators::key_fix_comparator::check_partial_credit;
pub use extractors::key_fix_extractor::extract_key_fixes;
pub use feedback::auto_feedback::compose_feedback;
pub use scorer::similarity_score;
pub use utilities::normalize::normalize_for_comparison;

use crate::comparators::exact_comparator::ExactComparator;
use crate::comparators::key_fix_comparator::KeyFixComparator;
use crate::error::ValidatorError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::feedback::hint_feedback::HintFeedback;
use crate::report::{ValidationReport, ValidationReportResponse};
use crate::traits::comparator::SubmissionComparator;
use crate::traits::feedback::Feedback;
use crate::types::{Submission, Verdict};
use crate::utilities::normalize::strip_whitespace;

use challenges::{Challenge, FeedbackScheme, ValidationConfig, ValidationScheme};
use chrono::Utc;
use tracing::{debug, info};

/// Represents the grading of a single submission.
///
/// Encapsulates the attempt, the configuration selecting the comparison and
/// feedback strategies, and any strategy overrides the caller installed.
///
/// # Fields
/// - `submission`: the player's code plus the challenge snippets.
/// - `config`: scheme selection (see [`ValidationConfig`]).
/// - `comparator` / `feedback`: optional overrides; when absent the schemes
///   from `config` decide.
/// - `hints` / `hints_used`: authored hints backing the hint feedback scheme.
pub struct ValidationJob<'a> {
    submission: Submission,
    config: ValidationConfig,
    comparator: Option<Box<dyn SubmissionComparator + 'a>>,
    feedback: Option<Box<dyn Feedback + 'a>>,
    hints: Vec<String>,
    hints_used: usize,
}

impl<'a> ValidationJob<'a> {
    /// Create a new validation job for one submission.
    pub fn new(submission: Submission, config: ValidationConfig) -> Self {
        Self {
            submission,
            config,
            comparator: None,
            feedback: None,
            hints: Vec::new(),
            hints_used: 0,
        }
    }

    /// Create a job for a catalog challenge, wiring in its snippets and
    /// authored hints.
    pub fn for_challenge(
        challenge: &Challenge,
        user_code: impl Into<String>,
        config: ValidationConfig,
    ) -> Self {
        let submission = Submission::new(
            user_code,
            challenge.buggy_code.clone(),
            challenge.correct_code.clone(),
        );
        let mut job = Self::new(submission, config);
        job.hints = challenge.hints.clone();
        job
    }

    /// Set a custom comparator strategy, overriding the configured scheme.
    pub fn with_comparator<C: SubmissionComparator + 'a>(mut self, comparator: C) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Set a custom feedback strategy, overriding the configured scheme.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    /// Record how many hints the player has already seen, so hint feedback
    /// reveals the next one.
    pub fn with_hints_used(mut self, hints_used: usize) -> Self {
        self.hints_used = hints_used;
        self
    }

    /// Run the validation and generate a report.
    ///
    /// # Returns
    /// * `Ok(ValidationReportResponse)` on success, containing the report.
    /// * `Err(ValidatorError)` if the feedback strategy cannot produce a
    ///   message (e.g. hint feedback without authored hints).
    ///
    /// # Steps
    /// 1. Judges the submission with the configured (or overridden)
    ///    comparator.
    /// 2. Scores similarity between the whitespace-stripped submission and
    ///    reference solution.
    /// 3. Assembles a guidance message for failed attempts via the feedback
    ///    strategy.
    pub fn run(&self) -> Result<ValidationReportResponse, ValidatorError> {
        let verdict = match &self.comparator {
            Some(comparator) => comparator.compare(&self.submission),
            None => match self.config.scheme {
                ValidationScheme::Exact => ExactComparator.compare(&self.submission),
                ValidationScheme::KeyFixes => KeyFixComparator.compare(&self.submission),
            },
        };
        debug!(
            passed = verdict.passed,
            missing = verdict.missing_fixes.len(),
            "submission compared"
        );

        let similarity = similarity_score(
            &strip_whitespace(&self.submission.user_code),
            &strip_whitespace(&self.submission.correct_code),
        );

        let feedback = if verdict.passed {
            None
        } else {
            Some(self.assemble_feedback(&verdict)?)
        };

        info!(solved = verdict.passed, similarity, "submission validated");

        let report = ValidationReport {
            solved: verdict.passed,
            missing_fixes: verdict.missing_fixes,
            similarity,
            feedback,
            attempted_at: Utc::now(),
        };
        Ok(report.into())
    }

    fn assemble_feedback(&self, verdict: &Verdict) -> Result<String, ValidatorError> {
        match &self.feedback {
            Some(feedback) => feedback.assemble_feedback(&self.submission, verdict),
            None => match self.config.feedback_scheme {
                FeedbackScheme::Auto => {
                    AutoFeedback.assemble_feedback(&self.submission, verdict)
                }
                FeedbackScheme::Hints => HintFeedback::new(self.hints.clone(), self.hints_used)
                    .assemble_feedback(&self.submission, verdict),
            },
        }
    }
}
