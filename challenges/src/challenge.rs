//! # Challenge Record
//!
//! One pre-authored debugging puzzle: the buggy snippet a player starts from,
//! the corrected snippet it is graded against, the error message the bug
//! produces, and the progressive hints an instructor wrote for it.

use crate::error::ChallengeError;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Difficulty tier of a challenge. Serialized in `lowercase` for catalog JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single debugging challenge.
///
/// Snippets are opaque text: the catalog performs no structural parsing of the
/// code, only presence checks. Grading semantics live in the validator crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Challenge {
    /// Position of this challenge within its language track (1-based).
    pub level: u32,
    pub language: Language,
    pub title: String,
    pub description: String,
    /// The snippet shown to the player, containing the planted bug.
    pub buggy_code: String,
    /// The reference solution submissions are graded against.
    pub correct_code: String,
    /// The runtime/compiler message the planted bug produces.
    pub error_message: String,
    /// Progressive hints, revealed one at a time.
    #[serde(default)]
    pub hints: Vec<String>,
    pub difficulty: Difficulty,
}

impl Challenge {
    /// Structural validation applied on catalog load.
    ///
    /// A challenge without a buggy or correct snippet cannot be graded, so the
    /// catalog refuses to load it rather than failing later mid-validation.
    pub fn validate(&self) -> Result<(), ChallengeError> {
        if self.buggy_code.trim().is_empty() {
            return Err(ChallengeError::EmptySnippet(format!(
                "{} level {}: buggy_code is empty",
                self.language.slug(),
                self.level
            )));
        }
        if self.correct_code.trim().is_empty() {
            return Err(ChallengeError::EmptySnippet(format!(
                "{} level {}: correct_code is empty",
                self.language.slug(),
                self.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Challenge {
        Challenge {
            level: 1,
            language: Language::Python,
            title: "Missing Colon".to_string(),
            description: "Fix the syntax error".to_string(),
            buggy_code: "def greet(name)\n    return name".to_string(),
            correct_code: "def greet(name):\n    return name".to_string(),
            error_message: "SyntaxError: invalid syntax".to_string(),
            hints: vec!["Look at the first line".to_string()],
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_valid_challenge_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_buggy_snippet_rejected() {
        let mut c = sample();
        c.buggy_code = "   \n".to_string();
        assert!(matches!(
            c.validate(),
            Err(ChallengeError::EmptySnippet(_))
        ));
    }

    #[test]
    fn test_empty_correct_snippet_rejected() {
        let mut c = sample();
        c.correct_code = String::new();
        assert!(matches!(
            c.validate(),
            Err(ChallengeError::EmptySnippet(_))
        ));
    }

    #[test]
    fn test_hints_default_to_empty() {
        let json = r#"{
            "level": 1,
            "language": "java",
            "title": "t",
            "description": "d",
            "buggy_code": "x",
            "correct_code": "y",
            "error_message": "e",
            "difficulty": "easy"
        }"#;
        let c: Challenge = serde_json::from_str(json).unwrap();
        assert!(c.hints.is_empty());
        assert_eq!(c.language, Language::Java);
    }
}
