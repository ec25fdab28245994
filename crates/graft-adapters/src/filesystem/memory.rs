//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use graft_core::{
    application::ports::Filesystem,
    error::{GraftError, GraftResult},
};

/// In-memory filesystem for testing.
///
/// Directories are implicit: a path "exists" as a directory when any stored
/// file lives beneath it, matching how the merge engine treats real trees.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file (testing helper).
    pub fn seed(&self, path: impl Into<PathBuf>, content: &[u8]) {
        self.inner
            .write()
            .expect("memory filesystem lock poisoned")
            .insert(path.into(), content.to_vec());
    }

    /// Read a file's content (testing helper).
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.inner.read().ok()?.get(path).cloned()
    }

    /// Read a file as text (testing helper).
    pub fn text(&self, path: &Path) -> Option<String> {
        self.file(path).and_then(|b| String::from_utf8(b).ok())
    }

    /// List all stored files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .expect("memory filesystem lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

fn lock_poisoned() -> GraftError {
    GraftError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk_files(&self, root: &Path) -> GraftResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        // BTreeMap keys are already sorted.
        Ok(inner
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> GraftResult<Vec<u8>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        inner.get(path).cloned().ok_or_else(|| {
            graft_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn read_to_string(&self, path: &Path) -> GraftResult<String> {
        String::from_utf8(self.read(path)?).map_err(|_| {
            graft_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".into(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> GraftResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.contains_key(path) || inner.keys().any(|p| p.starts_with(path))
    }

    fn remove_file(&self, path: &Path) -> GraftResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.remove(path).map(|_| ()).ok_or_else(|| {
            graft_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn remove_dir_all(&self, path: &Path) -> GraftResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
