//! # Challenge Catalog
//!
//! Loading and lookup for the set of debugging challenges. Catalogs are plain
//! JSON arrays of [`Challenge`] records; loading validates every record and
//! rejects duplicate (language, level) pairs so that lookups stay unambiguous.
//!
//! A default catalog is bundled into the crate (`data/challenges.json`) so the
//! workspace is usable without any external data files.

use crate::challenge::Challenge;
use crate::error::ChallengeError;
use crate::language::Language;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::error;

/// Maximum allowed size for a catalog JSON file.
const MAX_CATALOG_SIZE: u64 = 2 * 1024 * 1024; // 2MB

/// The catalog JSON compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("../data/challenges.json");

/// An ordered, validated collection of challenges.
///
/// Order is authoring order from the source JSON; within a language track,
/// levels are expected (but not required) to be ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    /// Builds a catalog from already-deserialized challenges, enforcing the
    /// structural rules every loader shares.
    ///
    /// # Errors
    ///
    /// - [`ChallengeError::EmptySnippet`] if any challenge has a blank snippet.
    /// - [`ChallengeError::DuplicateLevel`] if two challenges share a
    ///   (language, level) pair.
    pub fn from_challenges(challenges: Vec<Challenge>) -> Result<Self, ChallengeError> {
        let mut seen: HashSet<(Language, u32)> = HashSet::new();
        for challenge in &challenges {
            challenge.validate()?;
            if !seen.insert((challenge.language, challenge.level)) {
                return Err(ChallengeError::DuplicateLevel(format!(
                    "duplicate challenge for {} level {}",
                    challenge.language.slug(),
                    challenge.level
                )));
            }
        }
        Ok(Self { challenges })
    }

    /// Parses a catalog from a JSON array of challenge records.
    pub fn from_json_str(json: &str) -> Result<Self, ChallengeError> {
        let challenges: Vec<Challenge> = serde_json::from_str(json).map_err(|e| {
            error!("Invalid challenge catalog JSON: {e}");
            ChallengeError::InvalidJson(format!("Invalid challenge catalog JSON: {e}"))
        })?;
        Self::from_challenges(challenges)
    }

    /// Loads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::IoError`] if the file is missing, not a file,
    /// unreadable, or larger than [`MAX_CATALOG_SIZE`]; otherwise the errors of
    /// [`ChallengeCatalog::from_json_str`].
    pub fn from_file(path: &Path) -> Result<Self, ChallengeError> {
        if !path.exists() {
            error!("Catalog file not found: {}", path.display());
            return Err(ChallengeError::IoError(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            error!("Not a file: {}", path.display());
            return Err(ChallengeError::IoError(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let metadata = fs::metadata(path).map_err(|e| {
            error!("Catalog file unreadable: {} - {e}", path.display());
            ChallengeError::IoError(format!("Catalog file unreadable: {}", path.display()))
        })?;
        if metadata.len() > MAX_CATALOG_SIZE {
            error!(
                "Catalog file too large: {} ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                MAX_CATALOG_SIZE
            );
            return Err(ChallengeError::IoError(format!(
                "Catalog file too large: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read catalog {}: {e}", path.display());
            ChallengeError::IoError(format!("Failed to read catalog {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self, ChallengeError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Looks up a single challenge by language track and level.
    pub fn find(&self, language: Language, level: u32) -> Option<&Challenge> {
        self.challenges
            .iter()
            .find(|c| c.language == language && c.level == level)
    }

    /// All challenges of one language track, in catalog order.
    pub fn for_language(&self, language: Language) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| c.language == language)
            .collect()
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
