//! Merge Service - main application orchestrator.
//!
//! This service coordinates the entire template merge workflow:
//! 1. Resolve the ignore-pattern set for the template (once)
//! 2. Collect the candidate file list from the template tree
//! 3. Fold the per-file strategy over the candidates
//!    (path rewrite → copy-if-absent → package substitution → deferred render)
//! 4. Reconcile multi-module descriptors when requested
//! 5. Delegate the final descriptor merge to the descriptor store
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    DESCRIPTOR_FILE, IGNORE_FILE, RENDER_SUFFIX,
    application::ports::{DescriptorStore, Filesystem, TemplateRenderer, WorkingTree},
    domain::{
        CloudTemplate, Descriptor, IgnorePatterns, Project, ProjectConfiguration,
        SPRING_BOOT_GROUP, rewrite_source_path,
    },
    error::GraftResult,
};

/// Deterministic record of what one merge did.
///
/// Warnings (collision skips, path-rewrite misses, dirty working tree) are
/// carried here as data in addition to being logged, so callers and tests can
/// inspect them without capturing process-wide output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Target-relative paths of files copied from the template.
    pub copied: Vec<PathBuf>,
    /// Target-relative paths that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    /// Target-relative paths produced by deferred-render expansion.
    pub rendered: Vec<PathBuf>,
    /// Source-relative paths whose package-path rewrite had no effect.
    pub path_rewrite_misses: Vec<PathBuf>,
    /// Target-relative paths of submodule descriptors whose parent
    /// coordinates were reconciled.
    pub reconciled_modules: Vec<PathBuf>,
    /// The target was a dirty version-controlled working tree (advisory).
    pub dirty_worktree: bool,
}

impl MergeOutcome {
    /// Whether anything worth surfacing to the user happened.
    pub fn has_warnings(&self) -> bool {
        self.dirty_worktree || !self.skipped.is_empty() || !self.path_rewrite_misses.is_empty()
    }
}

/// One file surviving ignore resolution: an entry of the explicit candidate
/// list the strategy folds over.
#[derive(Debug, Clone)]
struct Candidate {
    /// Absolute path inside the template tree.
    source: PathBuf,
    /// Path relative to the template root, forward-slash normalized.
    rel: String,
}

/// Main merge service.
///
/// Orchestrates ignore resolution, the per-file merge strategy, multi-module
/// reconciliation, and the final descriptor merge.
pub struct MergeService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    descriptors: Box<dyn DescriptorStore>,
    worktree: Box<dyn WorkingTree>,
}

impl MergeService {
    /// Create a new merge service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        descriptors: Box<dyn DescriptorStore>,
        worktree: Box<dyn WorkingTree>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            descriptors,
            worktree,
        }
    }

    /// Merge one template into a target project.
    ///
    /// Additive: no pre-existing target file is ever overwritten or removed,
    /// with the single exception of multi-module reconciliation (descriptor
    /// stripping and root `src/` removal) when `multi_module_check` is set
    /// and the template is an aggregate.
    ///
    /// Returns the first unrecovered error from any stage; file-level
    /// warnings never abort the merge.
    #[instrument(
        skip_all,
        fields(template = %template.name, target = %target.path.display())
    )]
    pub fn merge(
        &self,
        template: &CloudTemplate,
        target: &Project,
        multi_module_check: bool,
    ) -> GraftResult<MergeOutcome> {
        let mut outcome = MergeOutcome {
            dirty_worktree: self.worktree.is_dirty(&target.path),
            ..MergeOutcome::default()
        };

        if outcome.dirty_worktree {
            warn!(
                "merging template {} into a dirty working tree {}",
                template.name,
                target.path.display()
            );
        } else {
            info!(
                "merging template {} into {}",
                template.name,
                target.path.display()
            );
        }

        let source = &template.project;
        let ignores = self.resolve_ignores(&source.path);
        let candidates = self.collect_candidates(&source.path, &ignores)?;

        // The target descriptor model this merge works against. Reconciliation
        // transforms it in memory; only the final merge writes it out.
        let mut working_model = target.descriptor.clone();

        for candidate in &candidates {
            self.merge_file(candidate, &source.config, target, &mut outcome)?;
        }

        if source.is_multi_module() && multi_module_check {
            self.reconcile_multi_module(source, target, &mut working_model, &mut outcome)?;
        }

        if let (Some(source_model), Some(target_model)) = (&source.descriptor, &working_model) {
            self.descriptors
                .merge_and_write(source_model, target_model, &target.descriptor_path())?;
        }

        Ok(outcome)
    }

    /// Apply several templates to one target, continuing past failures.
    ///
    /// Each failure is logged and reported alongside the template name; a bad
    /// template must not block the rest. Multi-module reconciliation is never
    /// triggered from this entry point.
    pub fn merge_all(
        &self,
        templates: &[CloudTemplate],
        target: &Project,
    ) -> Vec<(String, GraftResult<MergeOutcome>)> {
        templates
            .iter()
            .map(|template| {
                info!("applying template {}", template.name);
                let result = self.merge(template, target, false);
                if let Err(e) = &result {
                    warn!("template {} failed: {}", template.name, e);
                }
                (template.name.clone(), result)
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Ignore resolution
    // -------------------------------------------------------------------------

    /// Union of the template's ignore files and the built-in defaults.
    ///
    /// Both ignore files are optional; a read failure is logged and
    /// contributes an empty pattern list.
    fn resolve_ignores(&self, source_root: &Path) -> IgnorePatterns {
        let mut file_patterns = Vec::new();

        for name in [".gitignore", IGNORE_FILE] {
            let path = source_root.join(name);
            if !self.filesystem.exists(&path) {
                continue;
            }
            match self.filesystem.read_to_string(&path) {
                Ok(text) => file_patterns.extend(IgnorePatterns::parse(&text)),
                Err(e) => warn!("failed to read ignore file {}: {}", path.display(), e),
            }
        }

        IgnorePatterns::builtin().with_file_patterns(file_patterns)
    }

    // -------------------------------------------------------------------------
    // Candidate collection (phase one of the walk)
    // -------------------------------------------------------------------------

    /// Produce the explicit list of files the strategy will fold over.
    fn collect_candidates(
        &self,
        source_root: &Path,
        ignores: &IgnorePatterns,
    ) -> GraftResult<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for file in self.filesystem.walk_files(source_root)? {
            let rel = relative_path(source_root, &file);
            let at_source_root = !rel.contains('/');
            let full = normalize(&file);

            if ignores.is_ignored(&full, at_source_root) {
                debug!(path = %full, "ignoring");
                continue;
            }

            candidates.push(Candidate { source: file, rel });
        }

        debug!(count = candidates.len(), "collected candidates");
        Ok(candidates)
    }

    // -------------------------------------------------------------------------
    // Per-file strategy (phase two)
    // -------------------------------------------------------------------------

    fn merge_file(
        &self,
        candidate: &Candidate,
        source_config: &ProjectConfiguration,
        target: &Project,
        outcome: &mut MergeOutcome,
    ) -> GraftResult<()> {
        let rewrite = rewrite_source_path(&candidate.rel, source_config, &target.config);
        if rewrite.missed {
            warn!(
                "was not able to replace package path for source file, input and output path is the same: {}",
                rewrite.path
            );
            outcome.path_rewrite_misses.push(candidate.rel.clone().into());
        }

        let dest = target.join(&rewrite.path);

        // Copy-if-absent: first writer wins, the collision is logged and the
        // existing target content preserved.
        if self.filesystem.exists(&dest) {
            warn!("{} already exists", dest.display());
            outcome.skipped.push(rewrite.path.clone().into());
        } else {
            let content = self.filesystem.read(&candidate.source)?;
            self.filesystem.write(&dest, &content)?;
            info!("copying {}", candidate.source.display());
            outcome.copied.push(rewrite.path.clone().into());
        }

        // Package substitution runs against the destination whether or not
        // the copy happened: a colliding path is still a merge target.
        self.substitute_package(&dest, &source_config.package, &target.config.package)?;

        if rewrite.path.ends_with(RENDER_SUFFIX) {
            let output_rel = rewrite
                .path
                .strip_suffix(RENDER_SUFFIX)
                .expect("suffix checked above")
                .to_string();
            self.render_and_delete(&dest, &target.join(&output_rel), target)?;
            outcome.rendered.push(output_rel.into());
        }

        Ok(())
    }

    /// Literal, case-sensitive replacement of the source package identifier
    /// with the target's across the whole file. Non-UTF-8 content passes
    /// through unchanged.
    fn substitute_package(&self, path: &Path, from: &str, to: &str) -> GraftResult<()> {
        if from == to || from.is_empty() {
            return Ok(());
        }

        let bytes = self.filesystem.read(path)?;
        let Ok(text) = String::from_utf8(bytes) else {
            return Ok(());
        };
        if !text.contains(from) {
            return Ok(());
        }

        self.filesystem.write(path, text.replace(from, to).as_bytes())
    }

    /// Expand a deferred-render marker file and replace it with its output.
    fn render_and_delete(
        &self,
        marker: &Path,
        output: &Path,
        target: &Project,
    ) -> GraftResult<()> {
        info!("rendering {} into {}", marker.display(), output.display());
        let template_text = self.filesystem.read_to_string(marker)?;
        let rendered = self.renderer.render(&template_text, &target.config)?;
        self.filesystem.write(output, rendered.as_bytes())?;

        info!("deleting old render file {}", marker.display());
        self.filesystem.remove_file(marker)
    }

    // -------------------------------------------------------------------------
    // Multi-module reconciliation
    // -------------------------------------------------------------------------

    /// Fix up an aggregate merge: place submodule descriptors the walk
    /// excluded, point their parents at the target root, strip framework
    /// starter scaffolding from the root model, and remove root `src/`.
    ///
    /// Any I/O failure aborts reconciliation; already-applied side effects
    /// stay on disk.
    fn reconcile_multi_module(
        &self,
        source: &Project,
        target: &Project,
        working_model: &mut Option<Descriptor>,
        outcome: &mut MergeOutcome,
    ) -> GraftResult<()> {
        // Submodule descriptors were excluded from the candidate walk; they
        // are placed here, copy-if-absent like everything else.
        for source_pom in self.find_descriptors(&source.path, &source.descriptor_path())? {
            let rel = relative_path(&source.path, &source_pom);
            let dest = target.join(&rel);
            if !self.filesystem.exists(&dest) {
                let content = self.filesystem.read(&source_pom)?;
                self.filesystem.write(&dest, &content)?;
            }
        }

        // Parent rewrite needs the target root's own coordinates.
        let parent = working_model.as_ref().and_then(Descriptor::as_parent);
        match parent {
            Some(parent) => {
                for pom in self.find_descriptors(&target.path, &target.descriptor_path())? {
                    let model = self.descriptors.load(&pom)?;
                    self.descriptors.save(&pom, &model.with_parent(parent.clone()))?;
                    outcome
                        .reconciled_modules
                        .push(relative_path(&target.path, &pom).into());
                }
            }
            None => warn!(
                "target {} has no usable coordinates, skipping submodule parent rewrite",
                target.path.display()
            ),
        }

        // Framework starter dependencies and plugins do not belong at an
        // aggregate root.
        if let Some(model) = working_model.take() {
            *working_model = Some(model.without_group(SPRING_BOOT_GROUP));
        }

        // Template scaffolding source lives in submodules after the merge.
        let root_src = target.join("src");
        if self.filesystem.exists(&root_src) {
            self.filesystem.remove_dir_all(&root_src)?;
        }

        Ok(())
    }

    /// Every descriptor file under `root` except the root descriptor itself.
    fn find_descriptors(&self, root: &Path, root_descriptor: &Path) -> GraftResult<Vec<PathBuf>> {
        Ok(self
            .filesystem
            .walk_files(root)?
            .into_iter()
            .filter(|p| p.file_name().is_some_and(|n| n == DESCRIPTOR_FILE))
            .filter(|p| p != root_descriptor)
            .collect())
    }
}

// -------------------------------------------------------------------------
// Path helpers
// -------------------------------------------------------------------------

/// Forward-slash normalized string form of a path.
fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `file` relative to `root`, forward-slash normalized.
fn relative_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .map(normalize)
        .unwrap_or_else(|_| normalize(file))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
