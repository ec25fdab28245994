//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "graft",
    bin_name = "graft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Merge reusable templates into Maven projects",
    long_about = "Graft scaffolds and evolves Java/Kotlin Maven projects by \
                  merging a reusable template project into a target project's \
                  working directory.",
    after_help = "EXAMPLES:\n\
        \x20 graft merge spring-web --target ./my-service --catalog ~/graft-catalog\n\
        \x20 graft merge workspace-parent --multi-module --target .\n\
        \x20 graft merge base web docs --target ./my-service\n\
        \x20 graft completions bash > /usr/share/bash-completion/completions/graft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge one or more templates into a target project.
    #[command(
        visible_alias = "m",
        about = "Merge templates into a project",
        after_help = "EXAMPLES:\n\
            \x20 graft merge spring-web --target ./my-service\n\
            \x20 graft merge workspace-parent --multi-module\n\
            \x20 graft merge base web docs   # several templates, first writer wins"
    )]
    Merge(MergeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 graft completions bash > ~/.local/share/bash-completion/completions/graft\n\
            \x20 graft completions zsh  > ~/.zfunc/_graft\n\
            \x20 graft completions fish > ~/.config/fish/completions/graft.fish"
    )]
    Completions(CompletionsArgs),
}

// ── merge ─────────────────────────────────────────────────────────────────────

/// Arguments for `graft merge`.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Template names to apply, in order.
    #[arg(value_name = "TEMPLATE", required = true, help = "Template name(s) from the catalog")]
    pub templates: Vec<String>,

    /// Target project directory.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        default_value = ".",
        help = "Target project directory"
    )]
    pub target: PathBuf,

    /// Template catalog directory.
    #[arg(
        long = "catalog",
        value_name = "DIR",
        env = "GRAFT_CATALOG",
        help = "Template catalog directory"
    )]
    pub catalog: Option<PathBuf>,

    /// Run the multi-module reconciliation after the merge.
    ///
    /// Only meaningful when merging a single aggregate template; ignored for
    /// templates that declare no modules.
    #[arg(long = "multi-module", help = "Reconcile multi-module descriptors")]
    pub multi_module: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `graft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
