//! Stub templates and placeholder substitution.

use crate::domain::naming::NameResolver;

/// Which stub a generated file is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubKind {
    /// Component class that renders a separate view file.
    Class,
    /// Component class that renders its markup inline.
    InlineClass,
    /// View template paired with a `Class` stub.
    View,
}

impl StubKind {
    pub const ALL: [StubKind; 3] = [StubKind::Class, StubKind::InlineClass, StubKind::View];

    /// File name of the stub within the stub bundle.
    pub fn file_name(&self) -> &'static str {
        match self {
            StubKind::Class => "component.stub",
            StubKind::InlineClass => "component.inline.stub",
            StubKind::View => "component.view.stub",
        }
    }

    /// Class stub for the requested rendering mode.
    pub fn class(inline: bool) -> Self {
        if inline { StubKind::InlineClass } else { StubKind::Class }
    }
}

/// Values substituted into `[namespace]`, `[class]` and `[view]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubValues {
    pub namespace: String,
    pub class: String,
    pub view: String,
}

impl StubValues {
    pub fn from_resolver(name: &NameResolver) -> Self {
        Self {
            namespace: name.class_namespace(),
            class: name.class_name().to_string(),
            view: name.view_name(),
        }
    }
}

/// Replace every placeholder occurrence in `template`.
///
/// Unknown bracketed text is left untouched.
pub fn fill_stub(template: &str, values: &StubValues) -> String {
    template
        .replace("[namespace]", &values.namespace)
        .replace("[class]", &values.class)
        .replace("[view]", &values.view)
}
