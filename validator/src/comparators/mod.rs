//! # Comparators Module
//!
//! Pluggable strategies for judging a submission against its challenge.
//!
//! - [`exact_comparator`]: all-or-nothing normalized equality with the
//!   reference solution.
//! - [`key_fix_comparator`]: lenient partial credit; the submission passes if
//!   it contains every key fix extracted from the buggy/correct diff.

pub mod exact_comparator;
pub mod key_fix_comparator;
