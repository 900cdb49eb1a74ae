use hromada_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Invalid font data in '{name}': {message}")]
    InvalidData { name: String, message: String },
    #[error("Font resource error: {0}")]
    Resource(#[from] ResourceError),
}

pub mod fonts;
pub mod metrics;
pub mod text;

pub use self::fonts::{EmbeddedFont, FontFace, FontRole, FontSet};
pub use self::metrics::StandardFont;
pub use self::text::{wrap_text, wrap_with};
