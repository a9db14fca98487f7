use crate::domain::{AppError, StubKind};

/// Port for obtaining stub template text.
pub trait StubSource {
    /// Template text for `kind`.
    fn stub(&self, kind: StubKind) -> Result<String, AppError>;
}
