//! Project configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::namespace::class_directory_for_namespace;
use crate::domain::naming::{ComponentLayout, DEFAULT_CLASS_SUFFIX, DEFAULT_VIEW_SUFFIX};

/// Configuration loaded from `stubsmith.toml` at the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Application root namespace and source directory.
    #[serde(default)]
    pub app: AppConfig,
    /// Where components are generated.
    #[serde(default)]
    pub components: ComponentsConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.app.validate()?;
        self.components.validate()?;
        Ok(())
    }

    /// Build the component layout for a project rooted at `root`.
    ///
    /// `namespace_override` replaces the configured class namespace; its
    /// directory is derived from the application namespace mapping.
    pub fn layout(&self, root: &Path, namespace_override: Option<&str>) -> ComponentLayout {
        let namespace = namespace_override.unwrap_or(self.components.class_namespace.as_str());
        let app_path = root.join(&self.app.path);
        let class_directory =
            class_directory_for_namespace(&self.app.namespace, &app_path, namespace);

        ComponentLayout::new(namespace, class_directory, root.join(&self.components.view_path))
            .with_views_root(root.join(&self.components.views_root))
            .with_suffixes(&self.components.class_suffix, &self.components.view_suffix)
    }
}

/// Application namespace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Root namespace of application classes.
    #[serde(default = "default_app_namespace")]
    pub namespace: String,
    /// Directory the root namespace maps to, relative to the project root.
    #[serde(default = "default_app_path")]
    pub path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { namespace: default_app_namespace(), path: default_app_path() }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.namespace.trim_matches('\\').is_empty() {
            return Err(AppError::config_error("app.namespace must not be empty"));
        }
        Ok(())
    }
}

/// Component generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentsConfig {
    /// Namespace generated classes are placed under.
    #[serde(default = "default_class_namespace")]
    pub class_namespace: String,
    /// Directory generated views are written to, relative to the project root.
    #[serde(default = "default_view_path")]
    pub view_path: PathBuf,
    /// Directory dotted view names resolve from, relative to the project root.
    #[serde(default = "default_views_root")]
    pub views_root: PathBuf,
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,
    #[serde(default = "default_view_suffix")]
    pub view_suffix: String,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            class_namespace: default_class_namespace(),
            view_path: default_view_path(),
            views_root: default_views_root(),
            class_suffix: default_class_suffix(),
            view_suffix: default_view_suffix(),
        }
    }
}

impl ComponentsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.class_namespace.trim_matches('\\').is_empty() {
            return Err(AppError::config_error("components.class_namespace must not be empty"));
        }
        for (field, suffix) in
            [("class_suffix", &self.class_suffix), ("view_suffix", &self.view_suffix)]
        {
            if suffix.len() < 2 || !suffix.starts_with('.') {
                return Err(AppError::config_error(format!(
                    "components.{} must start with '.' followed by an extension, got '{}'",
                    field, suffix
                )));
            }
        }
        Ok(())
    }
}

fn default_app_namespace() -> String {
    "App".to_string()
}

fn default_app_path() -> PathBuf {
    PathBuf::from("app")
}

fn default_class_namespace() -> String {
    "App\\Http\\Livewire".to_string()
}

fn default_view_path() -> PathBuf {
    PathBuf::from("resources/views/livewire")
}

fn default_views_root() -> PathBuf {
    PathBuf::from("resources/views")
}

fn default_class_suffix() -> String {
    DEFAULT_CLASS_SUFFIX.to_string()
}

fn default_view_suffix() -> String {
    DEFAULT_VIEW_SUFFIX.to_string()
}
