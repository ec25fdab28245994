//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `graft-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and tree walking
//!   - `TemplateRenderer`: Deferred-render expansion
//!   - `DescriptorStore`: Build descriptor load/save/merge
//!   - `WorkingTree`: Advisory VCS dirty-state inspection
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DescriptorStore, Filesystem, TemplateRenderer, WorkingTree};
