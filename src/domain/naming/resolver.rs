use std::iter;
use std::path::{Component, Path, PathBuf};

use super::layout::ComponentLayout;
use super::resolved::ResolvedComponent;
use crate::domain::AppError;
use crate::domain::casing::{camel, kebab, studly};
use crate::domain::namespace::join_namespace;

/// Characters accepted between segments of a raw component name.
pub const SEGMENT_SEPARATORS: [char; 3] = ['.', '/', '\\'];

/// Names and paths derived from a raw component name.
///
/// `admin.settings.Theme`, `admin/settings/Theme` and `admin\settings\Theme`
/// all resolve to the class `Theme` in the `Admin\Settings` sub-namespace
/// and the view `admin/settings/theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolver {
    base_class_namespace: String,
    base_class_directory: PathBuf,
    base_view_directory: PathBuf,
    views_root: PathBuf,
    class_suffix: String,
    view_suffix: String,
    /// Raw text of each directory segment, outermost first.
    path_segments: Vec<String>,
    component_id: String,
    class_name: String,
}

impl NameResolver {
    /// Resolve `raw_identifier` against `layout`.
    ///
    /// Fails with [`AppError::InvalidIdentifier`] when nothing nameable is
    /// left after stripping separators.
    pub fn new(layout: &ComponentLayout, raw_identifier: &str) -> Result<Self, AppError> {
        let mut segments: Vec<&str> =
            raw_identifier.trim().split(SEGMENT_SEPARATORS).filter(|s| !s.is_empty()).collect();

        let leaf = segments
            .pop()
            .ok_or_else(|| AppError::InvalidIdentifier(raw_identifier.to_string()))?;

        let component_id = kebab(&camel(leaf));
        if component_id.is_empty() {
            return Err(AppError::InvalidIdentifier(raw_identifier.to_string()));
        }
        let class_name = studly(&component_id);

        // Segments such as `_` or `-` carry no word and would produce empty directories.
        let path_segments =
            segments.into_iter().filter(|s| !studly(s).is_empty()).map(str::to_string).collect();

        Ok(Self {
            base_class_namespace: layout.class_namespace.clone(),
            base_class_directory: layout.class_directory.clone(),
            base_view_directory: layout.view_directory.clone(),
            views_root: layout.views_root.clone(),
            class_suffix: layout.class_suffix.clone(),
            view_suffix: layout.view_suffix.clone(),
            path_segments,
            component_id,
            class_name,
        })
    }

    /// Kebab-case leaf name, e.g. `user-profile`.
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Studly-case leaf name, e.g. `UserProfile`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    pub fn studly_segments(&self) -> impl Iterator<Item = String> + '_ {
        self.path_segments.iter().map(|s| studly(s))
    }

    pub fn kebab_segments(&self) -> impl Iterator<Item = String> + '_ {
        self.path_segments.iter().map(|s| kebab(s))
    }

    pub fn class_file_name(&self) -> String {
        format!("{}{}", self.class_name, self.class_suffix)
    }

    /// Base namespace extended with the studly directory segments.
    pub fn class_namespace(&self) -> String {
        join_namespace(&self.base_class_namespace, self.studly_segments())
    }

    pub fn class_path(&self) -> PathBuf {
        let mut path = self.base_class_directory.clone();
        path.extend(self.studly_segments());
        path.push(self.class_file_name());
        path
    }

    /// `class_path()` below `project_root`, or the full path when it lies elsewhere.
    pub fn relative_class_path(&self, project_root: &Path) -> PathBuf {
        strip_project_root(&self.class_path(), project_root)
    }

    pub fn view_file_name(&self) -> String {
        format!("{}{}", self.component_id, self.view_suffix)
    }

    pub fn view_path(&self) -> PathBuf {
        let mut path = self.base_view_directory.clone();
        path.extend(self.kebab_segments());
        path.push(self.view_file_name());
        path
    }

    /// `view_path()` below `project_root`, or the full path when it lies elsewhere.
    pub fn relative_view_path(&self, project_root: &Path) -> PathBuf {
        strip_project_root(&self.view_path(), project_root)
    }

    /// Dotted name the view renderer resolves from the views root.
    ///
    /// Directories between the views root and the view directory come
    /// first, as they appear on disk. A view directory outside the views
    /// root contributes nothing.
    pub fn view_name(&self) -> String {
        // Not kebab-cased: the prefix must match the directories byte for byte.
        let prefix: Vec<String> = self
            .base_view_directory
            .strip_prefix(&self.views_root)
            .map(|rest| {
                rest.components()
                    .filter_map(|component| match component {
                        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        prefix
            .into_iter()
            .chain(self.kebab_segments())
            .chain(iter::once(self.component_id.clone()))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Snapshot of every derived value, with paths relative to `project_root`.
    pub fn describe(&self, project_root: &Path) -> ResolvedComponent {
        ResolvedComponent {
            component: self.component_id.clone(),
            class_name: self.class_name.clone(),
            class_namespace: self.class_namespace(),
            class_file: self.class_file_name(),
            class_path: self.relative_class_path(project_root).display().to_string(),
            view_name: self.view_name(),
            view_file: self.view_file_name(),
            view_path: self.relative_view_path(project_root).display().to_string(),
        }
    }
}

fn strip_project_root(path: &Path, project_root: &Path) -> PathBuf {
    path.strip_prefix(project_root).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}
