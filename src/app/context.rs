use crate::ports::{ProjectFilesystem, StubSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, S: StubSource> {
    filesystem: F,
    stubs: S,
}

impl<F: ProjectFilesystem, S: StubSource> AppContext<F, S> {
    /// Create a new application context.
    pub fn new(filesystem: F, stubs: S) -> Self {
        Self { filesystem, stubs }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the stub source.
    pub fn stubs(&self) -> &S {
        &self.stubs
    }
}
