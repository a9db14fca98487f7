//! stubsmith: derive component class and view names from a raw name and
//! generate their files from stubs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    GeneratedFile, MakeOptions, MakeOutcome, init, init_at, make, make_at, resolve, resolve_at,
};
pub use domain::{AppError, ComponentLayout, NameResolver, ResolvedComponent};
