//! Mapping between class namespaces and source directories.

use std::path::{Path, PathBuf};

/// Separator between namespace parts (`App\Http\Livewire`).
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Resolve the directory holding classes of `namespace`.
///
/// The application root namespace (`App`) maps to `app_path`; each
/// remaining namespace part becomes one directory level below it. A
/// namespace that does not start with the root namespace is laid out in
/// full under `app_path`.
pub fn class_directory_for_namespace(
    app_namespace: &str,
    app_path: &Path,
    namespace: &str,
) -> PathBuf {
    let namespace = namespace.trim_matches(NAMESPACE_SEPARATOR);
    let root = app_namespace.trim_matches(NAMESPACE_SEPARATOR);

    let relative = if namespace == root {
        ""
    } else {
        namespace
            .strip_prefix(root)
            .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
            .unwrap_or(namespace)
    };

    relative
        .split(NAMESPACE_SEPARATOR)
        .filter(|part| !part.is_empty())
        .fold(app_path.to_path_buf(), |dir, part| dir.join(part))
}

/// Join namespace parts with the namespace separator.
pub fn join_namespace<I, S>(base: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut namespace = base.to_string();
    for part in parts {
        namespace.push(NAMESPACE_SEPARATOR);
        namespace.push_str(part.as_ref());
    }
    namespace
}
