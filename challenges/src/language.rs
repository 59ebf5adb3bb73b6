use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the challenge catalog ships puzzles for.
/// Serialized/deserialized in `lowercase` for catalog JSON.
/// Common aliases are accepted (e.g., "py", "js", "c++").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(alias = "py")]
    Python, // "python"
    #[serde(alias = "js")]
    JavaScript, // "javascript"
    #[serde(alias = "c++", alias = "cc")]
    Cpp, // "cpp"
    Java, // "java"
}

impl Language {
    /// Conventional source-file extension, used for seeded file names.
    pub fn file_extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// Human-readable name for display in reports and logs.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Cpp => "C++",
            Language::Java => "Java",
        }
    }

    /// The lowercase identifier used in catalog JSON and file names.
    pub fn slug(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_round_trip() {
        for (lang, slug) in [
            (Language::Python, "\"python\""),
            (Language::JavaScript, "\"javascript\""),
            (Language::Cpp, "\"cpp\""),
            (Language::Java, "\"java\""),
        ] {
            assert_eq!(serde_json::to_string(&lang).unwrap(), slug);
            let back: Language = serde_json::from_str(slug).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn test_aliases_accepted() {
        assert_eq!(
            serde_json::from_str::<Language>("\"js\"").unwrap(),
            Language::JavaScript
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"py\"").unwrap(),
            Language::Python
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"c++\"").unwrap(),
            Language::Cpp
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"cc\"").unwrap(),
            Language::Cpp
        );
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(serde_json::from_str::<Language>("\"cobol\"").is_err());
    }

    #[test]
    fn test_display_and_extension() {
        assert_eq!(Language::Cpp.to_string(), "C++");
        assert_eq!(Language::Cpp.file_extension(), "cpp");
        assert_eq!(Language::Python.slug(), "python");
    }
}
