use std::path::PathBuf;

/// Class file suffix used when none is configured.
pub const DEFAULT_CLASS_SUFFIX: &str = ".php";

/// View file suffix used when none is configured.
pub const DEFAULT_VIEW_SUFFIX: &str = ".blade.php";

/// Where generated classes and views live, and how their files are named.
///
/// Paths are expected to be absolute; the resolver joins onto them without
/// consulting the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLayout {
    /// Namespace that generated classes are placed under.
    pub class_namespace: String,
    /// Directory that `class_namespace` maps to.
    pub class_directory: PathBuf,
    /// Directory generated views are written to.
    pub view_directory: PathBuf,
    /// Directory the view renderer resolves dotted view names from.
    pub views_root: PathBuf,
    pub class_suffix: String,
    pub view_suffix: String,
}

impl ComponentLayout {
    /// Layout with default suffixes whose views root is the view directory itself.
    pub fn new(
        class_namespace: impl Into<String>,
        class_directory: impl Into<PathBuf>,
        view_directory: impl Into<PathBuf>,
    ) -> Self {
        let view_directory = view_directory.into();
        Self {
            class_namespace: class_namespace.into(),
            class_directory: class_directory.into(),
            views_root: view_directory.clone(),
            view_directory,
            class_suffix: DEFAULT_CLASS_SUFFIX.to_string(),
            view_suffix: DEFAULT_VIEW_SUFFIX.to_string(),
        }
    }

    pub fn with_views_root(mut self, views_root: impl Into<PathBuf>) -> Self {
        self.views_root = views_root.into();
        self
    }

    pub fn with_suffixes(
        mut self,
        class_suffix: impl Into<String>,
        view_suffix: impl Into<String>,
    ) -> Self {
        self.class_suffix = class_suffix.into();
        self.view_suffix = view_suffix.into();
        self
    }
}
