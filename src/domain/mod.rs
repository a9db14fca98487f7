pub mod casing;
pub mod error;
pub mod namespace;
pub mod naming;
pub mod project_config;
pub mod stub;

pub use error::AppError;
pub use naming::{ComponentLayout, NameResolver, ResolvedComponent};
pub use project_config::ProjectConfig;
pub use stub::{StubKind, StubValues, fill_stub};
