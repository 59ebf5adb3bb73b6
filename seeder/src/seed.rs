use challenges::{Challenge, ChallengeCatalog, ChallengeError, Language};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one language track to `<dir>/<slug>_challenges.json`, then reloads
/// it through the real catalog loader so a bad write is caught immediately
/// instead of at play time.
pub fn seed_language(
    catalog: &ChallengeCatalog,
    language: Language,
    dir: &Path,
) -> Result<PathBuf, ChallengeError> {
    let track: Vec<&Challenge> = catalog.for_language(language);
    let json = serde_json::to_string_pretty(&track).map_err(|e| {
        ChallengeError::InvalidJson(format!("Failed to serialize {language} track: {e}"))
    })?;

    fs::create_dir_all(dir).map_err(|e| {
        ChallengeError::IoError(format!("Failed to create {}: {e}", dir.display()))
    })?;
    let path = dir.join(format!("{}_challenges.json", language.slug()));
    fs::write(&path, json).map_err(|e| {
        ChallengeError::IoError(format!("Failed to write {}: {e}", path.display()))
    })?;

    let reloaded = ChallengeCatalog::from_file(&path)?;
    if reloaded.len() != track.len() {
        return Err(ChallengeError::InvalidJson(format!(
            "{} round-trip mismatch: wrote {} challenges, reloaded {}",
            path.display(),
            track.len(),
            reloaded.len()
        )));
    }

    Ok(path)
}
