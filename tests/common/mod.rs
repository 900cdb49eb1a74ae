pub mod pdf_assertions;

use hromada_docs::{DocsError, DocumentKind, Generator, GeneratorConfig};
use hromada_layout::FontRole;
use hromada_traits::InMemoryResourceProvider;
use image::{ImageFormat, Rgba, RgbaImage};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Renders `kind` in memory with whatever `provider` holds.
pub fn render_with(
    provider: &InMemoryResourceProvider,
    kind: DocumentKind,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let generator = Generator::with_provider(GeneratorConfig::default(), provider)?;
    let bytes = generator.render(kind)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Renders `kind` with no fonts and no images available.
pub fn render_bare(kind: DocumentKind) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_with(&InMemoryResourceProvider::new(), kind)
}

/// A small translucent PNG with the given pixel size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([240, 240, 235, 180]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("in-memory PNG encoding");
    out.into_inner()
}

/// Every logo the documents use, at its native aspect ratio.
pub fn provider_with_logos() -> Result<InMemoryResourceProvider, DocsError> {
    let provider = InMemoryResourceProvider::new();
    provider.add("src/app/icon.png", png(32, 32))?;
    for (file, w, h) in [
        ("EcoactionLogo-white.png", 52, 24),
        ("EcoclubLogo-white.png", 47, 14),
        ("RePowerUkraineLogo-white.png", 51, 19),
        ("greenpeacelogo-white.png", 51, 26),
        ("energyactukrainelogo-white.png", 27, 27),
        ("pocacitologo-white.png", 75, 30),
        ("candidseal.png", 21, 22),
    ] {
        provider.add(&format!("public/partners/{}", file), png(w, h))?;
    }
    Ok(provider)
}

const DEJAVU_SANS: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf"));
const DEJAVU_SANS_BOLD: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans-Bold.ttf"));

/// A complete font directory: DejaVu Sans stands in for the regular faces and
/// DejaVu Sans Bold for the heavier ones.
pub fn provider_with_fonts() -> Result<InMemoryResourceProvider, DocsError> {
    let provider = InMemoryResourceProvider::new();
    for role in FontRole::ALL {
        let data = match role {
            FontRole::Body | FontRole::HeadReg => DEJAVU_SANS,
            _ => DEJAVU_SANS_BOLD,
        };
        provider.add(format!("docs/fonts/{}", role.file_name()), data.to_vec())?;
    }
    Ok(provider)
}
