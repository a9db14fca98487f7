//! Project-level filesystem operations.
//!
//! The port reads configuration and writes generated files. Paths passed in
//! are absolute; `root()` is the directory relative paths are reported
//! against.

use std::path::Path;

use crate::domain::AppError;

/// Port for filesystem access scoped to one project.
pub trait ProjectFilesystem {
    /// Project root directory.
    fn root(&self) -> &Path;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Delete a file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
