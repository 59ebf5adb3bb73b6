//! # Extractors
//!
//! Single-purpose passes that pull structure out of raw challenge text.
//!
//! - [`key_fix_extractor`]: heuristically diffs a buggy snippet against its
//!   corrected form to name the edits a submission must contain.

pub mod key_fix_extractor;
