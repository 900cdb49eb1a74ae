//! Streaming PDF surface built on lopdf.
//!
//! Pages are serialized as soon as they are finished. Fonts and the shared
//! resource dictionary are written once the document is closed, when the
//! full set of used glyphs is known.

mod fonts;
mod images;
mod page;
mod surface;
mod writer;

pub use surface::PdfSurface;
pub use writer::StreamingPdfWriter;
