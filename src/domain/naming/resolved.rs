use serde::Serialize;

/// Serializable view of a resolved component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedComponent {
    pub component: String,
    pub class_name: String,
    pub class_namespace: String,
    pub class_file: String,
    /// Relative to the project root when the class lies below it.
    pub class_path: String,
    pub view_name: String,
    pub view_file: String,
    /// Relative to the project root when the view lies below it.
    pub view_path: String,
}
