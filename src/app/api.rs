//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{EmbeddedStubs, LocalProjectFilesystem};
use crate::app::{
    AppContext,
    commands::{init, make, resolve},
};

pub use crate::app::commands::make::{GeneratedFile, MakeOptions, MakeOutcome};
pub use crate::domain::{AppError, ResolvedComponent};

/// Create an `AppContext` for a given project root.
fn create_context(path: PathBuf) -> AppContext<LocalProjectFilesystem, EmbeddedStubs> {
    AppContext::new(LocalProjectFilesystem::new(path), EmbeddedStubs::new())
}

/// Generate a component in the current directory.
pub fn make(options: &MakeOptions) -> Result<MakeOutcome, AppError> {
    make_at(std::env::current_dir()?, options)
}

/// Generate a component in the project at the specified path.
pub fn make_at(path: impl Into<PathBuf>, options: &MakeOptions) -> Result<MakeOutcome, AppError> {
    let ctx = create_context(path.into());
    make::execute(&ctx, options)
}

/// Resolve a component name against the project in the current directory.
pub fn resolve(name: &str, namespace: Option<&str>) -> Result<ResolvedComponent, AppError> {
    resolve_at(std::env::current_dir()?, name, namespace)
}

/// Resolve a component name against the project at the specified path.
pub fn resolve_at(
    path: impl Into<PathBuf>,
    name: &str,
    namespace: Option<&str>,
) -> Result<ResolvedComponent, AppError> {
    let ctx = create_context(path.into());
    resolve::execute(&ctx, name, namespace)
}

/// Write a default `stubsmith.toml` in the current directory.
pub fn init(force: bool) -> Result<PathBuf, AppError> {
    init_at(std::env::current_dir()?, force)
}

/// Write a default `stubsmith.toml` at the specified path.
pub fn init_at(path: impl Into<PathBuf>, force: bool) -> Result<PathBuf, AppError> {
    let ctx = create_context(path.into());
    init::execute(&ctx, force)
}
