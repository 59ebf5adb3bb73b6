//! # Challenges Library
//!
//! Domain data for the debugquest workspace: the catalog of pre-authored
//! buggy/correct code puzzles that the validator grades submissions against.
//!
//! ## Key Concepts
//! - **Challenge**: one puzzle: a buggy snippet, its corrected form, the error
//!   message the bug produces, and a set of progressive hints.
//! - **ChallengeCatalog**: an ordered, validated collection of challenges,
//!   loadable from JSON files or from the bundled default set.
//! - **ValidationConfig**: serde-backed configuration selecting the comparison
//!   and feedback strategies the validator applies.

pub mod catalog;
pub mod challenge;
pub mod config;
pub mod error;
pub mod language;

pub use catalog::ChallengeCatalog;
pub use challenge::{Challenge, Difficulty};
pub use config::{FeedbackScheme, ValidationConfig, ValidationScheme};
pub use error::ChallengeError;
pub use language::Language;
