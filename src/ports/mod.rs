mod project_filesystem;
mod stub_source;

pub use project_filesystem::ProjectFilesystem;
pub use stub_source::StubSource;
