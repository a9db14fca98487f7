//! Component name and path derivation.

mod layout;
mod resolved;
mod resolver;

pub use layout::{ComponentLayout, DEFAULT_CLASS_SUFFIX, DEFAULT_VIEW_SUFFIX};
pub use resolved::ResolvedComponent;
pub use resolver::{NameResolver, SEGMENT_SEPARATORS};
