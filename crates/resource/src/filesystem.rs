//! Filesystem provider rooted at the project checkout.
//!
//! Asset paths such as `docs/fonts/Inter-Regular.ttf` or
//! `public/partners/candidseal.png` are always relative to the project root.
//! Resolved paths must stay below that root.

use hromada_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads assets relative to a project root directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` below the root, or `None` when it would escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute() {
            return None;
        }

        let joined = self.root.join(relative);
        if let Ok(canonical) = joined.canonicalize()
            && let Some(root) = &self.canonical_root
        {
            return canonical.starts_with(root).then_some(canonical);
        }

        // Not on disk yet: refuse any parent-directory hop outright.
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }
        Some(joined)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let Some(full_path) = self.resolve(path) else {
            log::warn!("Refusing asset path outside project root: {}", path);
            return Err(ResourceError::NotFound(format!(
                "{} (outside project root)",
                path
            )));
        };

        match std::fs::read(&full_path) {
            Ok(bytes) => {
                log::trace!("Loaded {} ({} bytes)", full_path.display(), bytes.len());
                Ok(Arc::new(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
