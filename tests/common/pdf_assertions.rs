use lopdf::Document as LopdfDocument;

/// Raw content stream of a 1-based page, lossily decoded.
pub fn page_content(doc: &LopdfDocument, page: u32) -> String {
    let pages = doc.get_pages();
    pages
        .get(&page)
        .and_then(|id| doc.get_page_content(*id).ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Whether `text` is shown as a literal string anywhere in the document.
///
/// Only meaningful for base-font output, where strings are written as
/// WinAnsi literals.
pub fn shows_literal(doc: &LopdfDocument, text: &str) -> bool {
    let needle = format!("({}) Tj", text);
    (1..=doc.get_pages().len() as u32).any(|page| page_content(doc, page).contains(&needle))
}

/// BaseFont names of every font object in the file.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|o| o.as_dict().ok())
        .filter(|d| matches!(d.get(b"Type").and_then(|t| t.as_name()), Ok(b"Font")))
        .filter_map(|d| d.get(b"BaseFont").ok()?.as_name().ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Font dictionaries of the given `/Subtype`.
pub fn fonts_of_subtype<'a>(doc: &'a LopdfDocument, subtype: &[u8]) -> Vec<&'a lopdf::Dictionary> {
    doc.objects
        .values()
        .filter_map(|o| o.as_dict().ok())
        .filter(|d| matches!(d.get(b"Type").and_then(|t| t.as_name()), Ok(b"Font")))
        .filter(|d| d.get(b"Subtype").and_then(|t| t.as_name()).ok() == Some(subtype))
        .collect()
}

/// Text of every page as decoded by lopdf through each font's encoding.
pub fn extracted_text(doc: &LopdfDocument) -> Result<String, lopdf::Error> {
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
}

/// Number of image XObjects in the file.
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .filter(|s| matches!(s.dict.get(b"Subtype").and_then(|t| t.as_name()), Ok(b"Image")))
        .count()
}

/// Text value of an Info dictionary entry, decoding UTF-16BE strings.
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let raw = doc.get_dictionary(info_id).ok()?.get(key).ok()?.as_str().ok()?;
    if let Some(utf16) = raw.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).ok()
    } else {
        Some(String::from_utf8_lossy(raw).into_owned())
    }
}

/// MediaBox width and height of a 1-based page.
pub fn get_page_dimensions(doc: &LopdfDocument, page: u32) -> Option<(f32, f32)> {
    let id = *doc.get_pages().get(&page)?;
    let media_box = doc.get_dictionary(id).ok()?.get(b"MediaBox").ok()?.as_array().ok()?;
    let value = |i: usize| -> Option<f32> {
        media_box.get(i)?.as_float().ok()
    };
    Some((value(2)? - value(0)?, value(3)? - value(1)?))
}

/// Assert that the PDF shows a literal text run
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        assert!(
            $crate::common::pdf_assertions::shows_literal(&$pdf.doc, $text),
            "PDF should show '{}'",
            $text
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!((w - $width).abs() < 1.0, "Page {} width expected ~{}, got {}", $page, $width, w);
        assert!((h - $height).abs() < 1.0, "Page {} height expected ~{}, got {}", $page, $height, h);
    };
}
