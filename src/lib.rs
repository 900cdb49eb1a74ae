//! Renders the Hromada donor leave-behind and institutional deep-dive PDFs.
//!
//! ```no_run
//! use hromada_docs::{GeneratorConfig, run};
//!
//! let written = run(&GeneratorConfig::default())?;
//! # Ok::<(), hromada_docs::DocsError>(())
//! ```

pub mod assets;
pub mod config;
pub mod documents;
pub mod error;

pub use assets::Assets;
pub use config::GeneratorConfig;
pub use documents::{DocumentKind, compose, render_pdf};
pub use error::DocsError;

use hromada_resource::FilesystemResourceProvider;
use hromada_traits::ResourceProvider;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Resolved assets plus the paths to write to.
///
/// Assets are loaded once and shared by every document the generator
/// produces.
pub struct Generator {
    config: GeneratorConfig,
    assets: Assets,
}

impl Generator {
    /// Loads assets from the filesystem below `config.project_root`.
    pub fn new(config: GeneratorConfig) -> Result<Self, DocsError> {
        let provider = FilesystemResourceProvider::new(&config.project_root);
        Self::with_provider(config, &provider)
    }

    pub fn with_provider(
        config: GeneratorConfig,
        provider: &dyn ResourceProvider,
    ) -> Result<Self, DocsError> {
        let assets = Assets::load(provider, &config)?;
        Ok(Self { config, assets })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders `kind` into memory.
    pub fn render(&self, kind: DocumentKind) -> Result<Vec<u8>, DocsError> {
        let cursor = render_pdf(kind, std::io::Cursor::new(Vec::new()), &self.assets)?;
        Ok(cursor.into_inner())
    }

    /// Renders `kind` to its configured path, creating the output directory
    /// if needed.
    pub fn generate(&self, kind: DocumentKind) -> Result<PathBuf, DocsError> {
        fs::create_dir_all(self.config.output_path())?;
        let path = self.config.document_path(kind);
        let file = BufWriter::new(File::create(&path)?);
        let mut file = render_pdf(kind, file, &self.assets)?;
        file.flush()?;
        log::info!("Wrote {} to {}", kind, path.display());
        Ok(path)
    }

    /// Writes every document in [`DocumentKind::ALL`] order and hands each
    /// path to `on_written` as soon as that file is complete. Stops at the
    /// first failure; documents already written stay reported.
    pub fn generate_each(
        &self,
        mut on_written: impl FnMut(DocumentKind, &Path),
    ) -> Result<Vec<PathBuf>, DocsError> {
        let mut written = Vec::with_capacity(DocumentKind::ALL.len());
        for kind in DocumentKind::ALL {
            let path = self.generate(kind)?;
            on_written(kind, &path);
            written.push(path);
        }
        Ok(written)
    }

    pub fn generate_all(&self) -> Result<Vec<PathBuf>, DocsError> {
        self.generate_each(|_, _| {})
    }
}

/// Loads assets and writes both documents. Returns the written paths in
/// [`DocumentKind::ALL`] order.
pub fn run(config: &GeneratorConfig) -> Result<Vec<PathBuf>, DocsError> {
    Generator::new(config.clone())?.generate_all()
}
