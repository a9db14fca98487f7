use include_dir::{Dir, include_dir};

use crate::domain::{AppError, StubKind};
use crate::ports::StubSource;

static STUBS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/stubs");

/// Stubs bundled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedStubs;

impl EmbeddedStubs {
    pub fn new() -> Self {
        Self
    }
}

impl StubSource for EmbeddedStubs {
    fn stub(&self, kind: StubKind) -> Result<String, AppError> {
        STUBS_DIR
            .get_file(kind.file_name())
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::StubMissing(kind.file_name().to_string()))
    }
}
