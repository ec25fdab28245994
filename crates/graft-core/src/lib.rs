//! Graft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Graft
//! template merge engine, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           graft-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (MergeService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, DescriptorStore) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     graft-adapters (Infrastructure)     │
//! │  (LocalFilesystem, XmlDescriptorStore)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Project, Descriptor, IgnorePatterns)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use graft_core::application::MergeService;
//!
//! // Use application service (with injected adapters)
//! let service = MergeService::new(filesystem, renderer, descriptors, worktree);
//! let outcome = service.merge(&template, &target, true)?;
//! println!("copied {} files", outcome.copied.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MergeOutcome, MergeService,
        ports::{DescriptorStore, Filesystem, TemplateRenderer, WorkingTree},
    };
    pub use crate::domain::{
        CloudTemplate, Dependency, Descriptor, IgnorePatterns, Language, Parent, Plugin, Project,
        ProjectConfiguration,
    };
    pub use crate::error::{GraftError, GraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File-name suffix that marks a file for deferred template expansion.
pub const RENDER_SUFFIX: &str = ".render";

/// The build descriptor file name at every Maven project root.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Per-project configuration file consumed by graft.
pub const CONFIG_FILE: &str = "graft.json";

/// Tool-specific ignore file, read next to the project's `.gitignore`.
pub const IGNORE_FILE: &str = ".graft.ignore";
