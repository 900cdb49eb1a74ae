//! ResourceProvider trait for abstracting asset loading.
//!
//! Fonts and logo images are read through this trait so that document
//! assembly never touches the filesystem directly. Every asset the documents
//! use is optional; `load_optional` is the entry point for that case.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of asset bytes keyed by relative path.
///
/// # Implementations
///
/// - `FilesystemResourceProvider` (hromada-resource): reads below a project root
/// - `InMemoryResourceProvider`: pre-populated map, used by tests
pub trait ResourceProvider: Send + Sync + Debug {
    /// Bytes stored at `path`, or `NotFound`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, path: &str) -> bool;

    /// Load a resource that is allowed to be absent.
    ///
    /// A missing resource yields `Ok(None)`; any other failure (permissions,
    /// poisoned store, unreadable file) is still an error.
    fn load_optional(&self, path: &str) -> Result<Option<SharedResourceData>, ResourceError> {
        match self.load(path) {
            Ok(data) => Ok(Some(data)),
            Err(ResourceError::NotFound(_)) => {
                log::debug!("{}: optional resource '{}' is absent", self.name(), path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Short provider name used in log lines.
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be added before use. Tests use it to simulate any mix of
/// present and missing fonts or logos without touching the disk.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` at `path`, replacing any previous entry. Fails only
    /// when the store lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| poisoned(&path))?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }
}

fn poisoned(path: &str) -> ResourceError {
    ResourceError::LoadFailed {
        path: path.to_string(),
        message: "resource store lock poisoned".to_string(),
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| poisoned(path))?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
