//! # Validation Configuration
//!
//! Serde-backed configuration selecting which comparison and feedback
//! strategies the validator applies to a submission. Every field has a
//! default, so an empty JSON object (or a missing config file) yields a
//! usable configuration.

use crate::error::ChallengeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::warn;

/// How a submission is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationScheme {
    /// Strict: normalized equality with the correct snippet.
    Exact,
    /// Lenient: the submission must contain every extracted key fix.
    KeyFixes,
}

/// How feedback for a failed submission is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackScheme {
    /// Template feedback derived from similarity to the correct snippet.
    Auto,
    /// The challenge's authored hints, revealed progressively.
    Hints,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default = "default_scheme")]
    pub scheme: ValidationScheme,

    #[serde(default = "default_feedback_scheme")]
    pub feedback_scheme: FeedbackScheme,
}

fn default_scheme() -> ValidationScheme {
    ValidationScheme::Exact
}

fn default_feedback_scheme() -> FeedbackScheme {
    FeedbackScheme::Auto
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            feedback_scheme: default_feedback_scheme(),
        }
    }
}

impl ValidationConfig {
    /// Loads a configuration file, applying field defaults for anything the
    /// file omits.
    pub fn from_file(path: &Path) -> Result<Self, ChallengeError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ChallengeError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ChallengeError::InvalidJson(format!("Invalid config {}: {e}", path.display()))
        })
    }

    /// Resolves the configuration from the environment.
    ///
    /// Reads `.env` (if present), then `VALIDATOR_CONFIG` as a path to a JSON
    /// config file. A missing variable or unreadable file falls back to the
    /// defaults with a warning rather than failing the caller.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match env::var("VALIDATOR_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)).unwrap_or_else(|e| {
                warn!("Falling back to default validation config: {e:?}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
