use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryProjectFilesystem {
    root: PathBuf,
    // Shared so clones observe each other's writes.
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    read_only: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryProjectFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Arc::new(Mutex::new(BTreeMap::new())),
            read_only: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    /// Seed a file, relative to the root.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.root.join(relative);
        self.files.lock().unwrap().insert(path, content.to_string());
        self
    }

    /// Make writes to `relative` fail with `PermissionDenied`.
    pub fn with_read_only(self, relative: &str) -> Self {
        let path = self.root.join(relative);
        self.read_only.lock().unwrap().insert(path);
        self
    }

    /// Every stored path, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl ProjectFilesystem for MemoryProjectFilesystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Memory file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(
                io::Error::new(io::ErrorKind::PermissionDenied, "Memory file is read-only").into()
            );
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.files.lock().unwrap().remove(path).map(|_| ()).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Memory file not found"))
        })
    }
}
