//! Advisory git working-tree inspection.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use graft_core::application::ports::WorkingTree;

/// Dirty-state detection via the `git` CLI.
///
/// Advisory by contract: any failure — git missing, not a repository,
/// non-zero exit — degrades to "not dirty" and is only logged at debug
/// level. A dirty tree must never gate a merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitWorkingTree;

impl GitWorkingTree {
    pub fn new() -> Self {
        Self
    }
}

impl WorkingTree for GitWorkingTree {
    fn is_dirty(&self, root: &Path) -> bool {
        let output = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["status", "--porcelain"])
            .output();

        match output {
            Ok(out) if out.status.success() => !out.stdout.is_empty(),
            Ok(out) => {
                debug!(
                    "git status failed in {} (exit {:?}), treating as clean",
                    root.display(),
                    out.status.code()
                );
                false
            }
            Err(e) => {
                debug!("git unavailable ({e}), treating {} as clean", root.display());
                false
            }
        }
    }
}
