//! Build descriptor (POM) model.
//!
//! A deliberately bounded model of a Maven `pom.xml`: the merge engine only
//! reads and mutates coordinates, parent coordinates, the module list, the
//! dependency list, and the build plugin list. Everything else in a real POM
//! is outside the model and does not round-trip.
//!
//! All reconciliation transforms are pure: they consume a model and return a
//! new one, leaving the adapter layer to decide when to write anything back
//! to disk.

use serde::{Deserialize, Serialize};

/// Group identifier of framework starter artifacts that a multi-module
/// aggregate must not inherit at its root.
pub const SPRING_BOOT_GROUP: &str = "org.springframework.boot";

// ============================================================================
// Model
// ============================================================================

/// Parent coordinates of a submodule descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(rename = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "artifactId", default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}

/// One `<dependency>` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(rename = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "artifactId", default)]
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// One `<plugin>` entry under `<build><plugins>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    #[serde(rename = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "artifactId", default)]
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// `<modules>` wrapper element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modules {
    #[serde(rename = "module", default)]
    pub module: Vec<String>,
}

/// `<dependencies>` wrapper element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "dependency", default)]
    pub dependency: Vec<Dependency>,
}

/// `<build>` element; only the plugin list is modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

/// `<plugins>` wrapper element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    #[serde(rename = "plugin", default)]
    pub plugin: Vec<Plugin>,
}

/// The `<project>` document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(rename = "modelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,

    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(rename = "artifactId", default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Modules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
}

// ============================================================================
// Accessors
// ============================================================================

impl Descriptor {
    /// Whether the descriptor declares child modules.
    pub fn is_multi_module(&self) -> bool {
        self.modules.as_ref().is_some_and(|m| !m.module.is_empty())
    }

    pub fn module_names(&self) -> &[String] {
        self.modules.as_ref().map_or(&[], |m| m.module.as_slice())
    }

    pub fn dependency_list(&self) -> &[Dependency] {
        self.dependencies
            .as_ref()
            .map_or(&[], |d| d.dependency.as_slice())
    }

    pub fn plugin_list(&self) -> &[Plugin] {
        self.build
            .as_ref()
            .and_then(|b| b.plugins.as_ref())
            .map_or(&[], |p| p.plugin.as_slice())
    }

    /// Group identifier, falling back to the parent's (Maven inheritance).
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.group_id.as_str()))
    }

    /// Version, falling back to the parent's (Maven inheritance).
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.version.as_str()))
    }

    /// The coordinates submodules must point their `<parent>` at.
    ///
    /// Returns `None` when the descriptor cannot act as a parent (missing
    /// artifact or group).
    pub fn as_parent(&self) -> Option<Parent> {
        Some(Parent {
            group_id: self.effective_group_id()?.to_string(),
            artifact_id: self.artifact_id.clone()?,
            version: self.effective_version().unwrap_or_default().to_string(),
        })
    }
}

// ============================================================================
// Pure transforms
// ============================================================================

impl Descriptor {
    /// New model with the parent coordinates replaced.
    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    /// New model keeping only dependencies matching the predicate.
    ///
    /// An empty surviving list keeps an empty `<dependencies>` element rather
    /// than dropping it, so the element's presence is stable across a strip.
    pub fn retain_dependencies(mut self, keep: impl Fn(&Dependency) -> bool) -> Self {
        if let Some(deps) = self.dependencies.as_mut() {
            deps.dependency.retain(|d| keep(d));
        }
        self
    }

    /// New model keeping only build plugins matching the predicate.
    pub fn retain_plugins(mut self, keep: impl Fn(&Plugin) -> bool) -> Self {
        if let Some(plugins) = self.build.as_mut().and_then(|b| b.plugins.as_mut()) {
            plugins.plugin.retain(|p| keep(p));
        }
        self
    }

    /// New model with every dependency and build plugin of the given group
    /// removed. Used by multi-module reconciliation to strip framework
    /// starter scaffolding from an aggregate root.
    pub fn without_group(self, group: &str) -> Self {
        self.retain_dependencies(|d| d.group_id != group)
            .retain_plugins(|p| p.group_id != group)
    }
}

// ============================================================================
// Tests
// ============================================================================
