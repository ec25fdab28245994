// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (values, not boxed chains)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid package identifier '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("project at {path} has no build descriptor")]
    NotAMavenProject { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration(msg) => vec![
                "Check the project's graft.json".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidPackage { package, reason } => vec![
                format!("Package '{}' is not valid: {}", package, reason),
                "Use dot-separated lowercase segments, e.g. com.acme.demo".into(),
            ],
            Self::InvalidDescriptor(msg) => vec![
                format!("The pom.xml could not be used: {}", msg),
                "Verify the descriptor is well-formed XML".into(),
            ],
            Self::NotAMavenProject { path } => vec![
                format!("No pom.xml found at {}", path.display()),
                "Point graft at a directory containing a Maven project".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration(_)
            | Self::InvalidPackage { .. }
            | Self::InvalidDescriptor(_) => ErrorCategory::Validation,
            Self::NotAMavenProject { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
