//! Pure parse/validate for project configuration (`stubsmith.toml`).

use crate::domain::AppError;

use super::ProjectConfig;

/// Parse and validate project configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Render configuration as TOML for writing to disk.
pub fn render_config(config: &ProjectConfig) -> Result<String, AppError> {
    Ok(toml::to_string_pretty(config)?)
}
