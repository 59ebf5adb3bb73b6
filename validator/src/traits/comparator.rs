use crate::types::{Submission, Verdict};

/// SubmissionComparator is a strategy trait for judging submissions.
/// Each implementation provides a specific notion of "passing": strict
/// normalized equality, presence of every extracted key fix, or anything a
/// caller plugs in.
pub trait SubmissionComparator: Send + Sync {
    /// Judge one submission, producing a full [`Verdict`].
    fn compare(&self, submission: &Submission) -> Verdict;
}
