use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::project_config::{self, paths};
use crate::domain::{AppError, ProjectConfig};
use crate::ports::{ProjectFilesystem, StubSource};

/// Execute the init command.
///
/// Writes a `stubsmith.toml` holding the default layout to the project root.
pub fn execute<F, S>(ctx: &AppContext<F, S>, force: bool) -> Result<PathBuf, AppError>
where
    F: ProjectFilesystem,
    S: StubSource,
{
    let fs = ctx.filesystem();
    let config_path = paths::config(fs.root());

    if fs.file_exists(&config_path) && !force {
        return Err(AppError::ConfigExists);
    }

    let content = project_config::render_config(&ProjectConfig::default())?;
    fs.write_file(&config_path, &content)?;
    Ok(config_path)
}
