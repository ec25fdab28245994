// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Graft.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and rendering concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Transforms return new values

// Public API - what the world sees
pub mod descriptor;
pub mod error;
pub mod ignore;
pub mod path_rewrite;
pub mod project;

// Re-exports for convenience
pub use descriptor::{
    Build, Dependencies, Dependency, Descriptor, Modules, Parent, Plugin, Plugins,
    SPRING_BOOT_GROUP,
};
pub use error::{DomainError, ErrorCategory};
pub use ignore::IgnorePatterns;
pub use path_rewrite::{PathRewrite, SourceRoot, is_source_file, rewrite_source_path};
pub use project::{CloudTemplate, Language, Project, ProjectConfiguration};
