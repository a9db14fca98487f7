use crate::app::AppContext;
use crate::app::config::load_layout;
use crate::domain::{AppError, NameResolver, ResolvedComponent};
use crate::ports::{ProjectFilesystem, StubSource};

/// Execute the resolve command.
///
/// Reports the derived names and paths for `name` without touching any
/// generated file.
pub fn execute<F, S>(
    ctx: &AppContext<F, S>,
    name: &str,
    namespace: Option<&str>,
) -> Result<ResolvedComponent, AppError>
where
    F: ProjectFilesystem,
    S: StubSource,
{
    let fs = ctx.filesystem();
    let layout = load_layout(fs, namespace)?;
    let resolved = NameResolver::new(&layout, name)?;
    Ok(resolved.describe(fs.root()))
}
