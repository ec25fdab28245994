//! Ignore-pattern resolution.
//!
//! Patterns are matched as plain substrings against full paths — not glob
//! syntax. The resolved set is the union of the project's `.gitignore`, its
//! `.graft.ignore`, and a fixed built-in list. Order is irrelevant;
//! membership is what matters.

use crate::{CONFIG_FILE, DESCRIPTOR_FILE, IGNORE_FILE};

/// Built-in patterns appended to every resolved ignore set.
///
/// `Application` covers the entry-point class name convention
/// (`Application.java` / `Application.kt`), which every template carries and
/// no target wants copied over its own.
const BUILTIN: &[&str] = &[
    DESCRIPTOR_FILE,
    CONFIG_FILE,
    "Application",
    IGNORE_FILE,
    ".gitignore",
    ".mvn",
    "mvnw",
    "mvnw.cmd",
    ".idea",
    ".iml",
    ".git",
];

/// The resolved set of ignore patterns for one merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    /// Just the built-in defaults, no ignore-file contributions.
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Parse the text of one ignore file into patterns.
    ///
    /// One pattern per line; blank lines and `#` comments are skipped,
    /// surrounding whitespace is trimmed.
    pub fn parse(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    /// Prepend patterns read from an ignore file.
    ///
    /// File-sourced patterns come before the built-ins, mirroring the
    /// resolution order (project ignores first, defaults appended last).
    pub fn with_file_patterns(mut self, patterns: Vec<String>) -> Self {
        let mut combined = patterns;
        combined.append(&mut self.patterns);
        self.patterns = combined;
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a source file should be skipped by the merge walk.
    ///
    /// `at_source_root` refers to the file sitting immediately under the
    /// source project root. The root descriptor is never ignored — its merge
    /// is delegated to the descriptor reconciliation — while nested
    /// descriptors stay excluded and are handled by the multi-module
    /// reconciler.
    pub fn is_ignored(&self, path: &str, at_source_root: bool) -> bool {
        self.patterns.iter().any(|pattern| {
            if pattern == DESCRIPTOR_FILE && at_source_root {
                return false;
            }
            path.contains(pattern.as_str())
        })
    }
}
