use hromada_layout::FontError;
use hromada_render_core::RenderError;
use hromada_traits::ResourceError;
use thiserror::Error;

/// Everything that can stop a generation run.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Asset loading failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("Font loading failed: {0}")]
    Font(#[from] FontError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
