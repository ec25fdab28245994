//! Project aggregate and its configuration.
//!
//! A [`Project`] is one buildable unit on disk: a root directory, a
//! [`ProjectConfiguration`] (loaded from `graft.json`), and an optional
//! [`Descriptor`] model when a `pom.xml` exists at the root. The merge engine
//! mutates a project's files in place; it never deletes the project itself.
//!
//! [`CloudTemplate`] wraps a project living inside a template catalog. It is
//! read-only from the merge engine's perspective and always plays the role of
//! merge *source*.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::DESCRIPTOR_FILE;
use crate::domain::descriptor::Descriptor;
use crate::domain::error::DomainError;

// ============================================================================
// Language
// ============================================================================

/// Source language of a Maven project.
///
/// Determines the language-specific root under `src/main` / `src/test` and
/// which file extensions count as source files for path rewriting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Kotlin,
}

impl Language {
    /// Directory segment under `src/main` / `src/test` (e.g. `java`).
    pub fn source_dir(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java => write!(f, "java"),
            Self::Kotlin => write!(f, "kotlin"),
        }
    }
}

// ============================================================================
// ProjectConfiguration
// ============================================================================

/// Per-project configuration, persisted as `graft.json` at the project root.
///
/// The package identifier is the load-bearing field: it drives both the
/// source-path convention (`src/main/<lang>/<package-as-dirs>`) and the
/// literal content substitution applied to every merged file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    /// Dotted package identifier, e.g. `com.acme.demo`.
    pub package: String,

    /// Source language. Defaults to Java when absent from the file.
    #[serde(default)]
    pub language: Language,

    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(rename = "artifactId", default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form settings exposed to deferred-render templates.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, String>,
}

impl ProjectConfiguration {
    /// Minimal configuration from a package identifier alone.
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Package identifier as a directory fragment (`com.acme` → `com/acme`).
    pub fn package_path(&self) -> String {
        self.package.replace('.', "/")
    }

    /// Conventional main-source path, e.g. `src/main/java/com/acme/demo`.
    pub fn source_main_path(&self) -> String {
        format!("src/main/{}/{}", self.language.source_dir(), self.package_path())
    }

    /// Conventional test-source path, e.g. `src/test/java/com/acme/demo`.
    pub fn source_test_path(&self) -> String {
        format!("src/test/{}/{}", self.language.source_dir(), self.package_path())
    }

    /// Validate the invariants the merge engine relies on.
    ///
    /// The package identifier must be non-empty, with no empty segments and
    /// no whitespace or path separators that would corrupt derived paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.package.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "package identifier is empty".into(),
            ));
        }

        for segment in self.package.split('.') {
            if segment.is_empty() {
                return Err(DomainError::InvalidPackage {
                    package: self.package.clone(),
                    reason: "empty segment".into(),
                });
            }
            if segment.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
                return Err(DomainError::InvalidPackage {
                    package: self.package.clone(),
                    reason: format!("segment '{}' contains illegal characters", segment),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Project
// ============================================================================

/// A project directory on disk: the unit every merge operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Absolute or caller-relative root directory.
    pub path: PathBuf,

    /// Configuration loaded from `graft.json`.
    pub config: ProjectConfiguration,

    /// Build descriptor model, present iff `pom.xml` exists at the root.
    pub descriptor: Option<Descriptor>,
}

impl Project {
    pub fn new(path: impl Into<PathBuf>, config: ProjectConfiguration) -> Self {
        Self {
            path: path.into(),
            config,
            descriptor: None,
        }
    }

    /// Attach a loaded descriptor model (builder-style).
    pub fn with_descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Whether this project carries a build descriptor at its root.
    pub fn is_maven_project(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Whether the descriptor declares child modules (aggregate project).
    pub fn is_multi_module(&self) -> bool {
        self.descriptor
            .as_ref()
            .is_some_and(Descriptor::is_multi_module)
    }

    /// Path of the root descriptor file, whether or not it exists yet.
    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(DESCRIPTOR_FILE)
    }

    /// Join a project-relative path onto the project root.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path.join(rel)
    }
}

// ============================================================================
// CloudTemplate
// ============================================================================

/// A named template project inside the catalog; always the merge source.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudTemplate {
    pub name: String,
    pub project: Project,
}

impl CloudTemplate {
    pub fn new(name: impl Into<String>, project: Project) -> Self {
        Self {
            name: name.into(),
            project,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(package: &str, language: Language) -> ProjectConfiguration {
        ProjectConfiguration {
            package: package.into(),
            language,
            ..ProjectConfiguration::default()
        }
    }

    // ── derived paths ─────────────────────────────────────────────────────

    #[test]
    fn source_main_path_follows_convention() {
        let cfg = config("com.acme.demo", Language::Java);
        assert_eq!(cfg.source_main_path(), "src/main/java/com/acme/demo");
    }

    #[test]
    fn source_test_path_follows_convention() {
        let cfg = config("com.acme.demo", Language::Kotlin);
        assert_eq!(cfg.source_test_path(), "src/test/kotlin/com/acme/demo");
    }

    #[test]
    fn single_segment_package() {
        let cfg = config("demo", Language::Java);
        assert_eq!(cfg.source_main_path(), "src/main/java/demo");
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn empty_package_is_invalid() {
        assert!(config("", Language::Java).validate().is_err());
    }

    #[test]
    fn trailing_dot_is_invalid() {
        assert!(config("com.acme.", Language::Java).validate().is_err());
    }

    #[test]
    fn whitespace_in_segment_is_invalid() {
        assert!(config("com.a cme", Language::Java).validate().is_err());
    }

    #[test]
    fn plain_package_is_valid() {
        assert!(config("com.acme.demo", Language::Java).validate().is_ok());
    }

    // ── project flags ─────────────────────────────────────────────────────

    #[test]
    fn project_without_descriptor_is_not_maven() {
        let p = Project::new("/tmp/x", config("com.acme", Language::Java));
        assert!(!p.is_maven_project());
        assert!(!p.is_multi_module());
    }

    #[test]
    fn descriptor_path_points_at_root_pom() {
        let p = Project::new("/tmp/x", config("com.acme", Language::Java));
        assert_eq!(p.descriptor_path(), PathBuf::from("/tmp/x/pom.xml"));
    }

    // ── serde ─────────────────────────────────────────────────────────────

    #[test]
    fn configuration_deserializes_from_json() {
        let json = r#"{
            "package": "com.acme.demo",
            "language": "kotlin",
            "groupId": "com.acme",
            "artifactId": "demo"
        }"#;
        let cfg: ProjectConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.package, "com.acme.demo");
        assert_eq!(cfg.language, Language::Kotlin);
        assert_eq!(cfg.group_id.as_deref(), Some("com.acme"));
    }

    #[test]
    fn language_defaults_to_java() {
        let cfg: ProjectConfiguration =
            serde_json::from_str(r#"{ "package": "com.acme" }"#).unwrap();
        assert_eq!(cfg.language, Language::Java);
    }
}
