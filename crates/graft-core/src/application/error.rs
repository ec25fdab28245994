//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Deferred-render expansion failed for one file.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A descriptor file could not be loaded, merged, or written.
    #[error("Descriptor error at {path}: {reason}")]
    DescriptorError { path: PathBuf, reason: String },

    /// Named template missing from the catalog.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// The template catalog itself could not be opened or read.
    #[error("Catalog error: {reason}")]
    CatalogError { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Template expansion failed: {}", reason),
                "Check the .render file for malformed {{placeholders}}".into(),
            ],
            Self::DescriptorError { path, .. } => vec![
                format!("Failed to process: {}", path.display()),
                "Verify the pom.xml is well-formed".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}' in the catalog", name),
                "Check the catalog's templates/ directory".into(),
            ],
            Self::CatalogError { reason } => vec![
                format!("Catalog problem: {}", reason),
                "Pass --catalog pointing at a directory with a templates/ subdirectory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::DescriptorError { .. } => ErrorCategory::Internal,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::CatalogError { .. } => ErrorCategory::Configuration,
        }
    }
}
