//! Infrastructure adapters for Graft.
//!
//! This crate implements the ports defined in `graft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod descriptor;
pub mod filesystem;
pub mod git;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::{TemplateCatalog, load_project};
pub use descriptor::XmlDescriptorStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::GitWorkingTree;
pub use renderer::HandlebarsRenderer;
