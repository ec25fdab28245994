//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `graft-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Descriptor, ProjectConfiguration};
use crate::error::GraftResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `graft_adapters::filesystem::LocalFilesystem` (production)
/// - `graft_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `walk_files` returns an explicit, filterable list so the merge engine
///   folds a strategy over data instead of driving decisions inside a
///   traversal callback. Unit tests run against synthetic trees.
/// - File content is bytes, not `String`: merged trees contain binary
///   assets that must pass through untouched.
pub trait Filesystem: Send + Sync {
    /// Every file under `root`, recursively, in a deterministic sorted
    /// order. Directories are not reported; they exist implicitly through
    /// the files beneath them.
    fn walk_files(&self, root: &Path) -> GraftResult<Vec<PathBuf>>;

    /// Read a file's raw content.
    fn read(&self, path: &Path) -> GraftResult<Vec<u8>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> GraftResult<String>;

    /// Write content to a file, creating parent directories as needed.
    fn write(&self, path: &Path, content: &[u8]) -> GraftResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GraftResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GraftResult<()>;
}

/// Port for deferred-render expansion.
///
/// Implemented by:
/// - `graft_adapters::renderer::HandlebarsRenderer` (mustache-style syntax)
pub trait TemplateRenderer: Send + Sync {
    /// Expand a template string against the target project's configuration.
    ///
    /// The configuration is the data model: any of its (JSON-serializable)
    /// fields may appear as `{{placeholders}}` in the template.
    fn render(&self, template: &str, config: &ProjectConfiguration) -> GraftResult<String>;
}

/// Port for build descriptor persistence and reconciliation.
///
/// Implemented by:
/// - `graft_adapters::descriptor::XmlDescriptorStore`
pub trait DescriptorStore: Send + Sync {
    /// Load a descriptor model from a file.
    fn load(&self, path: &Path) -> GraftResult<Descriptor>;

    /// Write a descriptor model back with fixed indentation.
    fn save(&self, path: &Path, model: &Descriptor) -> GraftResult<()>;

    /// Merge the source model into the target model and write the result to
    /// `target_path`.
    ///
    /// Structural precedence belongs to the target: anything the target
    /// already declares is kept as-is, and only entries absent from the
    /// target are adopted from the source.
    fn merge_and_write(
        &self,
        source: &Descriptor,
        target: &Descriptor,
        target_path: &Path,
    ) -> GraftResult<()>;
}

/// Port for advisory VCS state inspection.
///
/// Implemented by:
/// - `graft_adapters::git::GitWorkingTree`
///
/// Purely informational: a dirty tree is logged, never a gate. Adapters
/// treat their own failures (no git, not a repository) as "not dirty".
pub trait WorkingTree: Send + Sync {
    fn is_dirty(&self, root: &Path) -> bool;
}
