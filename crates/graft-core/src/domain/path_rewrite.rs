//! Source-path rewriting between package conventions.
//!
//! Maps a template-relative file path to its target-relative equivalent by
//! replacing the recognized source-root fragment (`src/main/...` or
//! `src/test/...`) of the source package convention with the target's.
//! Only paths whose extension marks them as language source files are
//! touched; everything else passes through unchanged.

use crate::domain::project::ProjectConfiguration;

/// File extensions recognized as language source files.
const SOURCE_EXTENSIONS: &[&str] = &[".java", ".kt"];

/// The two recognized source roots a rewrite can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRoot {
    Main,
    Test,
}

impl SourceRoot {
    /// Identify which source root a relative path falls under, if any.
    pub fn of(path: &str) -> Option<Self> {
        if path.contains("src/main") {
            Some(Self::Main)
        } else if path.contains("src/test") {
            Some(Self::Test)
        } else {
            None
        }
    }

    /// The package-qualified fragment of this root for a configuration.
    pub fn fragment(self, config: &ProjectConfiguration) -> String {
        match self {
            Self::Main => config.source_main_path(),
            Self::Test => config.source_test_path(),
        }
    }
}

/// Result of one path rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewrite {
    /// The (possibly unchanged) output path.
    pub path: String,
    /// The extension matched but the rewrite had no effect — a convention
    /// mismatch the caller should surface as a warning, not a failure.
    pub missed: bool,
}

/// Whether a relative path names a language source file.
pub fn is_source_file(path: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Rewrite a source-relative path into the target's package convention.
///
/// Replaces the first occurrence of the source configuration's root fragment
/// with the target's. Non-source files are returned untouched and never
/// counted as a miss.
pub fn rewrite_source_path(
    rel_path: &str,
    source: &ProjectConfiguration,
    target: &ProjectConfiguration,
) -> PathRewrite {
    if !is_source_file(rel_path) {
        return PathRewrite {
            path: rel_path.to_string(),
            missed: false,
        };
    }

    let output = match SourceRoot::of(rel_path) {
        Some(root) => rel_path.replacen(&root.fragment(source), &root.fragment(target), 1),
        None => rel_path.to_string(),
    };

    let missed = output == rel_path;
    PathRewrite {
        path: output,
        missed,
    }
}
