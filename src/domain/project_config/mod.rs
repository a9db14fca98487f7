mod model;
pub mod parse;
pub mod paths;

pub use model::{AppConfig, ComponentsConfig, ProjectConfig};
pub use parse::{parse_config_content, render_config};
