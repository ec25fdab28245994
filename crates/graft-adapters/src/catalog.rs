//! Template catalog and project loading.
//!
//! A catalog is a plain directory with a `templates/` subdirectory; each
//! template is itself a project directory (a `graft.json` plus the files to
//! merge). Catalog retrieval and refresh from a remote source is a separate
//! concern — this adapter only opens what is already on disk.
//!
//! # Directory layout expected
//!
//! ```text
//! catalog/
//! └── templates/
//!     ├── spring-web/
//!     │   ├── graft.json           ← project configuration (required)
//!     │   ├── pom.xml
//!     │   └── src/main/java/...
//!     └── kotlin-service/
//!         ├── graft.json
//!         └── ...
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use graft_core::{
    CONFIG_FILE, DESCRIPTOR_FILE,
    application::{ApplicationError, ports::DescriptorStore},
    domain::{CloudTemplate, DomainError, Project, ProjectConfiguration},
    error::GraftResult,
};

use crate::descriptor::XmlDescriptorStore;

/// Name of the template directory inside a catalog.
pub const TEMPLATES_DIR: &str = "templates";

/// A local template catalog directory.
pub struct TemplateCatalog {
    root: PathBuf,
}

impl TemplateCatalog {
    /// Open a catalog rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::CatalogError`] when `root` has no
    /// `templates/` subdirectory.
    pub fn open(root: impl Into<PathBuf>) -> GraftResult<Self> {
        let root = root.into();
        let templates = root.join(TEMPLATES_DIR);
        if !templates.is_dir() {
            return Err(ApplicationError::CatalogError {
                reason: format!("no {TEMPLATES_DIR}/ directory under {}", root.display()),
            }
            .into());
        }
        Ok(Self { root })
    }

    /// Load one template by name as a merge source.
    #[instrument(skip(self), fields(catalog = %self.root.display()))]
    pub fn template(&self, name: &str) -> GraftResult<CloudTemplate> {
        let dir = self.root.join(TEMPLATES_DIR).join(name);
        if !dir.is_dir() {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }

        let project = load_project(&dir)?;
        debug!(package = %project.config.package, "loaded template");
        Ok(CloudTemplate::new(name, project))
    }
}

/// Load a project from a directory: its `graft.json` plus, when a `pom.xml`
/// exists at the root, the descriptor model.
///
/// A missing `graft.json` yields the default (empty-package) configuration —
/// targets that never opted into graft are still mergeable into. A present
/// but invalid configuration, or an unparseable descriptor, is an error.
pub fn load_project(dir: &Path) -> GraftResult<Project> {
    let config_path = dir.join(CONFIG_FILE);
    let config = if config_path.is_file() {
        let text = std::fs::read_to_string(&config_path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: config_path.clone(),
                reason: format!("Failed to read file: {e}"),
            }
        })?;
        let config: ProjectConfiguration = serde_json::from_str(&text)
            .map_err(|e| DomainError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        config
    } else {
        debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
        ProjectConfiguration::default()
    };

    let mut project = Project::new(dir, config);

    let descriptor_path = dir.join(DESCRIPTOR_FILE);
    if descriptor_path.is_file() {
        project.descriptor = Some(XmlDescriptorStore::new().load(&descriptor_path)?);
    }

    Ok(project)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
