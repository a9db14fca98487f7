//! Project configuration loading.

use crate::domain::project_config::{self, paths};
use crate::domain::{AppError, ComponentLayout, ProjectConfig};
use crate::ports::ProjectFilesystem;

/// Load `stubsmith.toml` from the project root, falling back to defaults when absent.
pub fn load_config<F: ProjectFilesystem>(filesystem: &F) -> Result<ProjectConfig, AppError> {
    let config_path = paths::config(filesystem.root());
    if !filesystem.file_exists(&config_path) {
        return Ok(ProjectConfig::default());
    }

    let content = filesystem.read_file(&config_path)?;
    project_config::parse_config_content(&content)
}

/// Load configuration and build the component layout for the project.
pub fn load_layout<F: ProjectFilesystem>(
    filesystem: &F,
    namespace_override: Option<&str>,
) -> Result<ComponentLayout, AppError> {
    let namespace_override = match namespace_override.map(|ns| ns.trim().trim_matches('\\')) {
        Some("") => {
            return Err(AppError::config_error("--namespace must not be empty"));
        }
        other => other,
    };

    let config = load_config(filesystem)?;
    Ok(config.layout(filesystem.root(), namespace_override))
}
