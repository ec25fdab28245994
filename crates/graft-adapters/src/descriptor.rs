//! XML descriptor store backed by quick-xml.
//!
//! Loads and saves the bounded [`Descriptor`] model and implements the final
//! source/target descriptor merge. Written POMs use a fixed four-space
//! indentation; content outside the model does not round-trip.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use graft_core::{
    application::ports::DescriptorStore,
    domain::Descriptor,
    error::{GraftError, GraftResult},
};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Descriptor store reading and writing `pom.xml` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDescriptorStore;

impl XmlDescriptorStore {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorStore for XmlDescriptorStore {
    fn load(&self, path: &Path) -> GraftResult<Descriptor> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| descriptor_error(path, format!("read failed: {e}")))?;
        quick_xml::de::from_str(&text)
            .map_err(|e| descriptor_error(path, format!("parse failed: {e}")))
    }

    fn save(&self, path: &Path, model: &Descriptor) -> GraftResult<()> {
        let xml = to_pretty_xml(model).map_err(|e| descriptor_error(path, e))?;
        std::fs::write(path, xml)
            .map_err(|e| descriptor_error(path, format!("write failed: {e}")))
    }

    fn merge_and_write(
        &self,
        source: &Descriptor,
        target: &Descriptor,
        target_path: &Path,
    ) -> GraftResult<()> {
        let merged = merge_models(source, target);
        debug!(
            dependencies = merged.dependency_list().len(),
            plugins = merged.plugin_list().len(),
            "writing merged descriptor to {}",
            target_path.display()
        );
        self.save(target_path, &merged)
    }
}

fn descriptor_error(path: &Path, reason: String) -> GraftError {
    graft_core::application::ApplicationError::DescriptorError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

/// Serialize a model as an indented `<project>` document.
fn to_pretty_xml(model: &Descriptor) -> Result<String, String> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some("project"))
        .map_err(|e| format!("serializer setup failed: {e}"))?;
    serializer.indent(' ', 4);
    model
        .serialize(serializer)
        .map_err(|e| format!("serialize failed: {e}"))?;

    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

/// Merge the source model into the target model.
///
/// Structural precedence belongs to the target: its coordinates, parent, and
/// existing entries always win. The templated parts — dependencies, build
/// plugins, and module declarations the target does not already carry — are
/// adopted from the source.
pub fn merge_models(source: &Descriptor, target: &Descriptor) -> Descriptor {
    let mut merged = target.clone();

    if merged.model_version.is_none() {
        merged.model_version = source.model_version.clone();
    }
    if merged.packaging.is_none() {
        merged.packaging = source.packaging.clone();
    }

    // Dependencies: union keyed by (group, artifact), target entries first.
    let mut dependencies = merged.dependencies.take().unwrap_or_default();
    for dep in source.dependency_list() {
        let present = dependencies
            .dependency
            .iter()
            .any(|d| d.group_id == dep.group_id && d.artifact_id == dep.artifact_id);
        if !present {
            dependencies.dependency.push(dep.clone());
        }
    }
    if !dependencies.dependency.is_empty() || target.dependencies.is_some() {
        merged.dependencies = Some(dependencies);
    }

    // Build plugins: same union.
    let mut plugins = merged
        .build
        .take()
        .and_then(|b| b.plugins)
        .unwrap_or_default();
    for plugin in source.plugin_list() {
        let present = plugins
            .plugin
            .iter()
            .any(|p| p.group_id == plugin.group_id && p.artifact_id == plugin.artifact_id);
        if !present {
            plugins.plugin.push(plugin.clone());
        }
    }
    if !plugins.plugin.is_empty() || target.build.is_some() {
        merged.build = Some(graft_core::domain::Build {
            plugins: Some(plugins),
        });
    }

    // Module declarations the target does not already carry.
    let mut modules = merged.modules.take().unwrap_or_default();
    for module in source.module_names() {
        if !modules.module.iter().any(|m| m == module) {
            modules.module.push(module.clone());
        }
    }
    if !modules.module.is_empty() {
        merged.modules = Some(modules);
    }

    merged
}
