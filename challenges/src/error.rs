//! Challenge Catalog Error Types
//!
//! This module defines the [`ChallengeError`] enum, which encapsulates all error
//! types that can occur while loading and validating challenge catalogs and
//! validation configuration files.
//!
//! # Usage
//!
//! Use [`ChallengeError`] as the error type in functions that may fail due to
//! input, parsing, or I/O issues. Each variant carries a descriptive message.

/// Represents all error types that can occur while handling challenge data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// I/O error (file not found, unreadable, too large, etc.).
    IoError(String),
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
    /// A challenge carries an empty buggy or correct snippet.
    EmptySnippet(String),
    /// Two challenges share the same (language, level) pair.
    DuplicateLevel(String),
}
