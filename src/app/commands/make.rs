use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::load_layout;
use crate::domain::{AppError, NameResolver, ResolvedComponent, StubKind, StubValues, fill_stub};
use crate::ports::{ProjectFilesystem, StubSource};

/// Options for generating a component.
#[derive(Debug, Clone, Default)]
pub struct MakeOptions {
    /// Raw component name, e.g. `admin.settings.Theme`.
    pub name: String,
    /// Render markup inline in the class instead of a separate view.
    pub inline: bool,
    /// Overwrite existing files.
    pub force: bool,
    /// Class namespace to generate into instead of the configured one.
    pub namespace: Option<String>,
    /// Render without writing.
    pub dry_run: bool,
}

/// A file produced by `make`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root when it lies below it.
    pub path: PathBuf,
    pub contents: String,
}

/// Result of a `make` invocation.
#[derive(Debug, Clone)]
pub struct MakeOutcome {
    pub component: ResolvedComponent,
    pub class: GeneratedFile,
    /// Absent for inline components.
    pub view: Option<GeneratedFile>,
    /// True when nothing was written.
    pub dry_run: bool,
}

/// Execute the make command.
///
/// Resolves the component name against the project layout, renders the
/// class stub (and the view stub unless inline), and writes both files.
/// Existing files are only replaced when `force` is set. When the view
/// cannot be written the class file is put back the way it was.
pub fn execute<F, S>(
    ctx: &AppContext<F, S>,
    options: &MakeOptions,
) -> Result<MakeOutcome, AppError>
where
    F: ProjectFilesystem,
    S: StubSource,
{
    let fs = ctx.filesystem();
    let root = fs.root();

    let layout = load_layout(fs, options.namespace.as_deref())?;
    let name = NameResolver::new(&layout, &options.name)?;

    let class_path = name.class_path();
    let view_path = (!options.inline).then(|| name.view_path());

    if !options.force {
        ensure_absent(fs, "Class", &class_path)?;
        if let Some(view_path) = &view_path {
            ensure_absent(fs, "View", view_path)?;
        }
    }

    let values = StubValues::from_resolver(&name);
    let class_contents = fill_stub(&ctx.stubs().stub(StubKind::class(options.inline))?, &values);
    let view_contents = match &view_path {
        Some(_) => Some(fill_stub(&ctx.stubs().stub(StubKind::View)?, &values)),
        None => None,
    };

    if !options.dry_run {
        let previous_class =
            if fs.file_exists(&class_path) { Some(fs.read_file(&class_path)?) } else { None };

        fs.write_file(&class_path, &class_contents)?;
        if let (Some(path), Some(contents)) = (&view_path, &view_contents) {
            if let Err(err) = fs.write_file(path, contents) {
                // The view error is the one reported.
                let _ = restore(fs, &class_path, previous_class.as_deref());
                return Err(err);
            }
        }
    }

    Ok(MakeOutcome {
        component: name.describe(root),
        class: GeneratedFile { path: name.relative_class_path(root), contents: class_contents },
        view: view_contents.map(|contents| GeneratedFile {
            path: name.relative_view_path(root),
            contents,
        }),
        dry_run: options.dry_run,
    })
}

fn restore<F: ProjectFilesystem>(
    fs: &F,
    path: &Path,
    previous: Option<&str>,
) -> Result<(), AppError> {
    match previous {
        Some(contents) => fs.write_file(path, contents),
        None => fs.remove_file(path),
    }
}

fn ensure_absent<F: ProjectFilesystem>(fs: &F, kind: &str, path: &Path) -> Result<(), AppError> {
    if fs.file_exists(path) {
        let shown = path.strip_prefix(fs.root()).unwrap_or(path);
        return Err(AppError::ComponentExists {
            kind: kind.to_string(),
            path: shown.display().to_string(),
        });
    }
    Ok(())
}
