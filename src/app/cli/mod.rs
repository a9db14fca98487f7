//! CLI Adapter.

use std::io::{self, BufRead, ErrorKind, IsTerminal};

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, MakeOptions, MakeOutcome};
use crate::domain::{AppError, ResolvedComponent};

#[derive(Parser)]
#[command(name = "stubsmith")]
#[command(version)]
#[command(
    about = "Generate component classes and views from framework stubs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a component class and view
    #[clap(visible_alias = "mk")]
    Make {
        /// Component name; `.`, `/` or `\` separate sub-namespaces (admin.settings.Theme)
        name: Option<String>,
        /// Render markup inline in the class instead of a view file
        #[arg(short, long)]
        inline: bool,
        /// Overwrite existing class and view files
        #[arg(short, long)]
        force: bool,
        /// Class namespace to generate into (defaults to components.class_namespace)
        #[arg(short, long)]
        namespace: Option<String>,
        /// Show what would be written without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the names and paths a component name resolves to
    #[clap(visible_alias = "r")]
    Resolve {
        /// Component name
        name: String,
        /// Class namespace to resolve against
        #[arg(short, long)]
        namespace: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a default stubsmith.toml to the current directory
    Init {
        /// Replace an existing stubsmith.toml
        #[arg(short, long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Make { name, inline, force, namespace, dry_run } => {
            run_make(name, inline, force, namespace, dry_run)
        }
        Commands::Resolve { name, namespace, json } => run_resolve(&name, namespace, json),
        Commands::Init { force } => run_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_make(
    name: Option<String>,
    inline: bool,
    force: bool,
    namespace: Option<String>,
    dry_run: bool,
) -> Result<(), AppError> {
    let name = match name {
        Some(value) => value,
        None => match prompt_component_name()? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    let outcome = api::make(&MakeOptions { name, inline, force, namespace, dry_run })?;
    print_make_outcome(&outcome);
    Ok(())
}

fn print_make_outcome(outcome: &MakeOutcome) {
    if outcome.dry_run {
        println!("Dry run: component '{}' would be created", outcome.component.component);
        for file in std::iter::once(&outcome.class).chain(outcome.view.as_ref()) {
            println!("\n--- {}", file.path.display());
            print!("{}", file.contents);
        }
        return;
    }

    println!("✅ Created component '{}'", outcome.component.component);
    println!("  CLASS: {}", outcome.class.path.display());
    if let Some(view) = &outcome.view {
        println!("  VIEW:  {}", view.path.display());
    }
}

fn run_resolve(name: &str, namespace: Option<String>, json: bool) -> Result<(), AppError> {
    let resolved = api::resolve(name, namespace.as_deref())?;

    if json {
        let rendered = serde_json::to_string_pretty(&resolved).map_err(io::Error::from)?;
        println!("{}", rendered);
    } else {
        print_resolved(&resolved);
    }
    Ok(())
}

fn print_resolved(resolved: &ResolvedComponent) {
    println!("component:       {}", resolved.component);
    println!("class:           {}", resolved.class_name);
    println!("namespace:       {}", resolved.class_namespace);
    println!("class path:      {}", resolved.class_path);
    println!("view:            {}", resolved.view_name);
    println!("view path:       {}", resolved.view_path);
}

fn run_init(force: bool) -> Result<(), AppError> {
    let path = api::init(force)?;
    println!("✅ Wrote {}", path.display());
    Ok(())
}

/// Ask for a component name, interactively when attached to a terminal.
fn prompt_component_name() -> Result<Option<String>, AppError> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| AppError::config_error(format!("Failed to read component name: {}", e)))?;
        return Ok(Some(input.trim().to_string()));
    }

    match Input::<String>::new().with_prompt("Component name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read component name: {}", err))),
    }
}
