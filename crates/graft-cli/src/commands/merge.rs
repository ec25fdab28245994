//! Implementation of the `graft merge` command.

use std::path::PathBuf;

use graft_adapters::{
    GitWorkingTree, HandlebarsRenderer, LocalFilesystem, TemplateCatalog, XmlDescriptorStore,
    load_project,
};
use graft_core::application::{MergeOutcome, MergeService};

use crate::{
    cli::{GlobalArgs, MergeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: MergeArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if !args.target.is_dir() {
        return Err(CliError::TargetNotFound {
            path: args.target.clone(),
        });
    }

    let catalog_dir = resolve_catalog(&args, &config)?;
    let catalog = TemplateCatalog::open(catalog_dir)?;
    let target = load_project(&args.target)?;

    output.header(&format!(
        "Merging {} template(s) into {}",
        args.templates.len(),
        args.target.display()
    ))?;

    let service = MergeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(XmlDescriptorStore::new()),
        Box::new(GitWorkingTree::new()),
    );

    // A single template gets the full merge (multi-module reconciliation
    // included when requested); several templates are applied in sequence,
    // continuing past individual failures.
    if let [name] = args.templates.as_slice() {
        let template = catalog.template(name)?;
        let outcome = service.merge(&template, &target, args.multi_module)?;
        report(&output, name, &outcome)?;
        output.success(&format!("merged template {name} into {}", args.target.display()))?;
        return Ok(());
    }

    let templates = args
        .templates
        .iter()
        .map(|name| catalog.template(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut failed = 0usize;
    for (name, result) in service.merge_all(&templates, &target) {
        match result {
            Ok(outcome) => report(&output, &name, &outcome)?,
            Err(e) => {
                failed += 1;
                output.error(&format!("template {name} failed: {e}"))?;
            }
        }
    }

    if failed == 0 {
        output.success(&format!(
            "merged {} templates into {}",
            args.templates.len(),
            args.target.display()
        ))?;
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: format!("{failed} of {} templates failed", args.templates.len()),
        })
    }
}

/// `--catalog` flag first, then the configuration file.
fn resolve_catalog(args: &MergeArgs, config: &AppConfig) -> CliResult<PathBuf> {
    args.catalog
        .clone()
        .or_else(|| config.catalog.path.clone())
        .ok_or(CliError::NoCatalog)
}

/// Summarize one merge outcome on the terminal.
fn report(output: &OutputManager, name: &str, outcome: &MergeOutcome) -> CliResult<()> {
    output.print(&format!(
        "{name}: {} copied, {} rendered",
        outcome.copied.len(),
        outcome.rendered.len()
    ))?;

    if outcome.dirty_worktree {
        output.warning("target working tree has uncommitted changes")?;
    }
    for path in &outcome.skipped {
        output.warning(&format!("kept existing {}", path.display()))?;
    }
    for path in &outcome.path_rewrite_misses {
        output.warning(&format!("package path not rewritten for {}", path.display()))?;
    }
    for path in &outcome.reconciled_modules {
        output.print(&format!("reconciled {}", path.display()))?;
    }

    Ok(())
}
