//! Core rendering abstractions.
//!
//! - `Surface` trait: the drawing primitives the compositor paints with
//! - `RenderError`: errors raised by surfaces and backends
//! - `RecordingSurface`: an in-memory surface that captures draw operations
//! - Shared helpers for text anchoring

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawOp, RecordingSurface};
pub use traits::Surface;
pub use types::{DocumentInfo, ImageAsset};
