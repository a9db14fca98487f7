use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "stubsmith.toml";

/// `<root>/stubsmith.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
