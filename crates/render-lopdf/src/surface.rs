use crate::fonts::FontRegistry;
use crate::images::ImageRegistry;
use crate::page::PageContext;
use crate::writer::StreamingPdfWriter;
use chrono::Utc;
use hromada_layout::FontFace;
use hromada_render_core::{DocumentInfo, ImageAsset, RenderError, Surface};
use hromada_types::{Color, Point, Rect, Size};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::io::{Seek, Write};
use std::mem;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = concat!("hromada-docs ", env!("CARGO_PKG_VERSION"));

/// A [`Surface`] that streams each finished page into a PDF.
///
/// Page content is written as soon as a page is closed. Fonts are written
/// at [`finish`](PdfSurface::finish), once every glyph in use is known; all
/// pages share one resource dictionary whose id is reserved up front.
pub struct PdfSurface<W: Write + Seek> {
    writer: StreamingPdfWriter<W>,
    size: Size,
    page: PageContext,
    fonts: FontRegistry,
    images: ImageRegistry,
    resources_id: ObjectId,
    info: DocumentInfo,
}

impl<W: Write + Seek> PdfSurface<W> {
    pub fn new(writer: W, size: Size) -> Result<Self, RenderError> {
        let mut writer = StreamingPdfWriter::new(writer, PDF_VERSION)?;
        let resources_id = writer.new_object_id();
        Ok(Self {
            writer,
            size,
            page: PageContext::new(),
            fonts: FontRegistry::default(),
            images: ImageRegistry::default(),
            resources_id,
            info: DocumentInfo::default(),
        })
    }

    fn write_current_page(&mut self) -> Result<(), RenderError> {
        let page = mem::replace(&mut self.page, PageContext::new());
        let content_id = self.writer.write_content_stream(page.finish())?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.writer.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                self.size.width.into(),
                self.size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.writer.write_object(page_dict.into())?;
        self.writer.add_page(page_id);
        log::debug!("Wrote page {} as object {:?}", self.writer.page_count(), page_id);
        Ok(())
    }

    /// Closes the last page, writes fonts, resources and metadata, and
    /// returns the underlying writer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        self.write_current_page()?;

        let font_dict = self.fonts.write_all(&mut self.writer)?;
        let resources = dictionary! {
            "Font" => font_dict,
            "XObject" => self.images.resource_dict(),
        };
        self.writer
            .write_object_at_id(self.resources_id, &resources.into())?;

        let info = info_dictionary(&self.info);
        let pages = self.writer.page_count();
        let writer = self.writer.finish(Some(info))?;
        log::debug!("Finished PDF with {} pages", pages);
        Ok(writer)
    }
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = dictionary! {
        "Producer" => text_string(PRODUCER),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    };
    if !info.title.is_empty() {
        dict.set("Title", text_string(&info.title));
    }
    if !info.author.is_empty() {
        dict.set("Author", text_string(&info.author));
    }
    dict
}

/// A PDF text string: plain ASCII as a literal, anything else as UTF-16BE
/// with a byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

impl<W: Write + Seek> Surface for PdfSurface<W> {
    fn page_size(&self) -> Size {
        self.size
    }

    fn current_page(&self) -> usize {
        self.writer.page_count() + 1
    }

    fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.page.fill_rect(rect, color);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.page.fill_round_rect(rect, radius, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.page.fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.page.stroke_line(from, to, width, color);
    }

    fn draw_text(&mut self, origin: Point, text: &str, font: &FontFace, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        let (resource, encoded) = self.fonts.encode(font, text);
        self.page.show_text(origin, &resource, size, color, encoded);
    }

    fn draw_image(&mut self, image: &ImageAsset, rect: Rect) -> Result<(), RenderError> {
        let embedded = self.images.get_or_embed(&mut self.writer, image)?;
        self.page
            .place_image(&embedded.resource_name, rect.fit_centered(embedded.aspect()));
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.write_current_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hromada_layout::EmbeddedFont;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use hromada_types::LETTER;
    use std::sync::Arc;

    fn load(bytes: &[u8]) -> lopdf::Document {
        lopdf::Document::load_mem(bytes).expect("output should parse")
    }

    fn page_text(doc: &lopdf::Document, page: u32) -> String {
        let pages = doc.get_pages();
        let id = pages[&page];
        String::from_utf8_lossy(&doc.get_page_content(id).unwrap()).into_owned()
    }

    #[test]
    fn pages_are_counted_and_text_is_readable() {
        let mut surface = PdfSurface::new(Cursor::new(Vec::new()), LETTER).unwrap();
        surface.fill_rect(Rect::new(0.0, 752.0, 612.0, 40.0), Color::from_u32(0x2C3E50));
        surface.draw_text(
            Point::new(84.0, 764.0),
            "hromada",
            &FontFace::HELVETICA_BOLD,
            14.0,
            Color::WHITE,
        );
        assert_eq!(surface.current_page(), 1);
        surface.show_page().unwrap();
        assert_eq!(surface.current_page(), 2);
        surface.draw_text(Point::new(54.0, 36.0), "2 / 2", &FontFace::HELVETICA, 7.0, Color::BLACK);

        let bytes = surface.finish().unwrap().into_inner();
        let doc = load(&bytes);
        assert_eq!(doc.get_pages().len(), 2);
        assert!(page_text(&doc, 1).contains("(hromada) Tj"));
        assert!(page_text(&doc, 2).contains("(2 / 2) Tj"));

        let base_fonts: Vec<&[u8]> = doc
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter_map(|d| d.get(b"BaseFont").ok()?.as_name().ok())
            .collect();
        assert!(base_fonts.contains(&b"Helvetica-Bold".as_slice()));
        assert!(base_fonts.contains(&b"Helvetica".as_slice()));
    }

    #[test]
    fn embedded_face_is_written_as_type0_with_tounicode() {
        let data = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../assets/fonts/DejaVuSans.ttf"
        ));
        let font = EmbeddedFont::parse("docs/fonts/Inter-Regular.ttf", Arc::new(data.to_vec())).unwrap();
        let face = FontFace::Embedded(Arc::new(font));

        let mut surface = PdfSurface::new(Cursor::new(Vec::new()), LETTER).unwrap();
        surface.draw_text(Point::new(54.0, 700.0), "Громада hromada", &face, 12.0, Color::BLACK);
        let bytes = surface.finish().unwrap().into_inner();
        let doc = load(&bytes);

        let fonts: Vec<&Dictionary> = doc
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter(|d| d.get(b"Type").and_then(|t| t.as_name()).ok() == Some(b"Font".as_slice()))
            .collect();
        let type0 = fonts
            .iter()
            .find(|d| d.get(b"Subtype").and_then(|t| t.as_name()).ok() == Some(b"Type0".as_slice()))
            .expect("Type0 font");
        assert_eq!(type0.get(b"BaseFont").unwrap().as_name().unwrap(), b"DejaVuSans");
        assert_eq!(type0.get(b"Encoding").unwrap().as_name().unwrap(), b"Identity-H");
        assert!(type0.get(b"ToUnicode").unwrap().as_reference().is_ok());

        let descendant = fonts
            .iter()
            .find(|d| d.get(b"Subtype").and_then(|t| t.as_name()).ok() == Some(b"CIDFontType2".as_slice()))
            .expect("CIDFontType2 descendant");
        let descriptor_id = descendant.get(b"FontDescriptor").unwrap().as_reference().unwrap();
        let descriptor = doc.get_dictionary(descriptor_id).unwrap();
        assert_eq!(descriptor.get(b"FontName").unwrap().as_name().unwrap(), b"DejaVuSans");

        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Громада hromada"), "extracted: {:?}", text);
    }

    #[test]
    fn info_carries_title_and_author() {
        let mut surface = PdfSurface::new(Cursor::new(Vec::new()), LETTER).unwrap();
        surface.set_info(DocumentInfo::new(
            "Hromada — Connecting US Donors",
            "Hromada | A Project of POCACITO Network",
        ));
        let bytes = surface.finish().unwrap().into_inner();
        let doc = load(&bytes);

        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(
            info.get(b"Author").unwrap().as_str().unwrap(),
            b"Hromada | A Project of POCACITO Network"
        );
        let title = info.get(b"Title").unwrap().as_str().unwrap();
        assert_eq!(&title[..2], &[0xFE, 0xFF]);
        assert!(info.get(b"CreationDate").is_ok());
    }

    #[test]
    fn images_are_embedded_once_and_placed_per_use() {
        let img = RgbaImage::from_pixel(10, 5, Rgba([255, 255, 255, 200]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png).unwrap();
        let asset = ImageAsset::new("logo", Arc::new(png.into_inner()));

        let mut surface = PdfSurface::new(Cursor::new(Vec::new()), LETTER).unwrap();
        surface.draw_image(&asset, Rect::new(56.0, 761.0, 22.0, 22.0)).unwrap();
        surface.show_page().unwrap();
        surface.draw_image(&asset, Rect::new(56.0, 761.0, 22.0, 22.0)).unwrap();

        let bytes = surface.finish().unwrap().into_inner();
        let doc = load(&bytes);
        let image_count = doc
            .objects
            .values()
            .filter_map(|o| o.as_stream().ok())
            .filter(|s| s.dict.get(b"ColorSpace").and_then(|c| c.as_name()).ok() == Some(b"DeviceRGB".as_slice()))
            .count();
        assert_eq!(image_count, 1);
        assert!(page_text(&doc, 1).contains("/Im1 Do"));
        assert!(page_text(&doc, 2).contains("/Im1 Do"));
    }

    #[test]
    fn broken_image_reports_its_name() {
        let mut surface = PdfSurface::new(Cursor::new(Vec::new()), LETTER).unwrap();
        let asset = ImageAsset::new("Ecoclub", Arc::new(vec![0, 1, 2]));
        match surface.draw_image(&asset, Rect::new(0.0, 0.0, 10.0, 10.0)) {
            Err(RenderError::Image { name, .. }) => assert_eq!(name, "Ecoclub"),
            other => panic!("expected image error, got {:?}", other.err()),
        }
    }
}
