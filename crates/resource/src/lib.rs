//! Asset providers for the Hromada document generator.
//!
//! - [`FilesystemResourceProvider`]: reads fonts and logos below the project root
//! - [`InMemoryResourceProvider`]: re-exported from hromada-traits for tests

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use hromada_traits::InMemoryResourceProvider;
