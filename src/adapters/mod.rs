mod embedded_stubs;
mod local_filesystem;
#[cfg(test)]
mod memory_filesystem;

pub use embedded_stubs::EmbeddedStubs;
pub use local_filesystem::LocalProjectFilesystem;
#[cfg(test)]
pub use memory_filesystem::MemoryProjectFilesystem;
