//! # Key-Fix Extractor
//!
//! Heuristically diffs a buggy snippet against its corrected form and produces
//! a short list of named required edits ("add colon", "fix indentation", ...),
//! used by the partial-credit comparator and for hint display.
//!
//! This is a set of cheap pattern rules, not a diff algorithm. False
//! negatives (missed fixes) and false positives (irrelevant fixes, e.g. a
//! keyword that happens to appear only in the correct snippet) are part of
//! the contract: downstream checks treat an empty extraction as a vacuous
//! pass. The rules never fail, for any input including empty strings.

use crate::types::KeyFix;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A Python-style function header ending in `):`.
static DEF_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def\s+\w+\([^)]*\):").expect("valid def-header pattern"));

/// Maximal runs of word characters; identifier filtering happens on top.
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid word-run pattern"));

/// Extracts the key fixes between a buggy and a correct snippet.
///
/// Four rules are applied independently, in order; every rule that matches
/// appends its fixes, duplicates and all:
///
/// 1. a `def` header missing its closing `):`;
/// 2. the first line whose leading-whitespace count differs from the correct
///    snippet's (only scanned when the buggy code contains `if `, `for ` or
///    `while `; only the first mismatch with a non-blank correct line is
///    reported);
/// 3. semicolons absent from the buggy snippet but present in the correct one;
/// 4. identifier tokens (longer than two characters) that appear in the
///    correct snippet but nowhere in the buggy one, in first-appearance order.
pub fn extract_key_fixes(buggy_code: &str, correct_code: &str) -> Vec<KeyFix> {
    let mut fixes = Vec::new();

    // Rule 1: function header missing its colon.
    if buggy_code.contains("def ")
        && !DEF_HEADER.is_match(buggy_code)
        && DEF_HEADER.is_match(correct_code)
    {
        fixes.push(KeyFix {
            fixed: "):".to_string(),
            description: "Add colon after function definition".to_string(),
        });
    }

    // Rule 2: first indentation mismatch. Reported as correct-indent spaces
    // plus the trimmed correct line, even when the original indent used tabs.
    if buggy_code.contains("if ") || buggy_code.contains("for ") || buggy_code.contains("while ")
    {
        for (buggy_line, correct_line) in buggy_code.split('\n').zip(correct_code.split('\n')) {
            let buggy_indent = leading_whitespace(buggy_line);
            let correct_indent = leading_whitespace(correct_line);
            if buggy_indent != correct_indent && !correct_line.trim().is_empty() {
                fixes.push(KeyFix {
                    fixed: format!("{}{}", " ".repeat(correct_indent), correct_line.trim()),
                    description: "Fix indentation".to_string(),
                });
                break;
            }
        }
    }

    // Rule 3: semicolons dropped wholesale.
    if !buggy_code.contains(';') && correct_code.contains(';') {
        fixes.push(KeyFix {
            fixed: ";".to_string(),
            description: "Add semicolons".to_string(),
        });
    }

    // Rule 4: identifiers present only in the correct snippet.
    let buggy_tokens: HashSet<&str> = identifier_tokens(buggy_code).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    for token in identifier_tokens(correct_code) {
        if !seen.insert(token) {
            continue;
        }
        if !buggy_tokens.contains(token) && token.len() > 2 {
            fixes.push(KeyFix {
                fixed: token.to_string(),
                description: format!("Use correct variable name: {token}"),
            });
        }
    }

    fixes
}

/// Count of leading whitespace characters on a line.
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Identifier-shaped tokens: maximal word runs that start with a letter or
/// underscore. A run like `2x` yields nothing, since `x` is not a run start.
fn identifier_tokens(code: &str) -> impl Iterator<Item = &str> {
    WORD_RUN
        .find_iter(code)
        .map(|m| m.as_str())
        .filter(|run| run.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_'))
}
