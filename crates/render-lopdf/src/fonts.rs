//! Font resources for a single document.
//!
//! Standard faces are referenced by name with WinAnsiEncoding. Embedded
//! faces are written as Type0 fonts over an Identity-H CIDFontType2
//! descendant; text is shown as big-endian glyph ids, and the glyphs seen
//! while painting drive the width array and the ToUnicode map.

use crate::writer::StreamingPdfWriter;
use hromada_layout::{EmbeddedFont, FontFace, StandardFont};
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Seek, Write};
use std::sync::Arc;

struct FontSlot {
    resource_name: String,
    face: FontFace,
    /// glyph id -> character, for embedded faces.
    used_glyphs: BTreeMap<u16, char>,
}

#[derive(Default)]
pub(crate) struct FontRegistry {
    slots: Vec<FontSlot>,
    by_name: HashMap<String, usize>,
}

impl FontRegistry {
    /// Returns the resource name for `face` and the string object that
    /// shows `text` in it, registering the face on first use.
    pub fn encode(&mut self, face: &FontFace, text: &str) -> (String, Object) {
        let idx = match self.by_name.get(face.name()) {
            Some(idx) => *idx,
            None => {
                let idx = self.slots.len();
                let resource_name = format!("F{}", idx + 1);
                log::debug!("Registering font '{}' as /{}", face.name(), resource_name);
                self.slots.push(FontSlot {
                    resource_name,
                    face: face.clone(),
                    used_glyphs: BTreeMap::new(),
                });
                self.by_name.insert(face.name().to_string(), idx);
                idx
            }
        };

        let slot = &mut self.slots[idx];
        let object = match &slot.face {
            FontFace::Standard(std) => Object::String(std.encode(text), StringFormat::Literal),
            FontFace::Embedded(font) => {
                let mut bytes = Vec::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    let gid = font.glyph_id(ch);
                    slot.used_glyphs.entry(gid).or_insert(ch);
                    bytes.extend_from_slice(&gid.to_be_bytes());
                }
                Object::String(bytes, StringFormat::Hexadecimal)
            }
        };
        (slot.resource_name.clone(), object)
    }

    /// Writes every registered font and returns the `/Font` resource dictionary.
    pub fn write_all<W: Write + Seek>(
        &self,
        writer: &mut StreamingPdfWriter<W>,
    ) -> io::Result<Dictionary> {
        let mut font_dict = Dictionary::new();
        for slot in &self.slots {
            let id = match &slot.face {
                FontFace::Standard(std) => write_standard_font(writer, *std)?,
                FontFace::Embedded(font) => write_embedded_font(writer, font, &slot.used_glyphs)?,
            };
            font_dict.set(slot.resource_name.as_bytes(), id);
        }
        Ok(font_dict)
    }
}

fn write_standard_font<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    font: StandardFont,
) -> io::Result<ObjectId> {
    writer.write_object(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        }
        .into(),
    )
}

fn write_embedded_font<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    font: &Arc<EmbeddedFont>,
    used_glyphs: &BTreeMap<u16, char>,
) -> io::Result<ObjectId> {
    let base_font = font.postscript_name.as_str();

    let font_file_id = writer.write_compressed_stream(
        dictionary! { "Length1" => font.data.len() as i64 },
        &font.data,
    )?;

    let bbox: Vec<Object> = font
        .bbox
        .iter()
        .map(|v| Object::Integer(font.to_pdf_units(*v as i32) as i64))
        .collect();
    let descriptor_id = writer.write_object(
        dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => base_font,
            "Flags" => 32,
            "FontBBox" => bbox,
            "ItalicAngle" => font.italic_angle,
            "Ascent" => font.to_pdf_units(font.ascender as i32),
            "Descent" => font.to_pdf_units(font.descender as i32),
            "CapHeight" => font.to_pdf_units(font.cap_height as i32),
            "StemV" => 80,
            "FontFile2" => font_file_id,
        }
        .into(),
    )?;

    let widths: Vec<Object> = used_glyphs
        .keys()
        .flat_map(|gid| {
            let width = font.to_pdf_units(font.advance(*gid) as i32);
            [
                Object::Integer(*gid as i64),
                Object::Array(vec![Object::Integer(width as i64)]),
            ]
        })
        .collect();

    let cid_font_id = writer.write_object(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => base_font,
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::string_literal("Adobe"),
                "Ordering" => Object::string_literal("Identity"),
                "Supplement" => 0,
            },
            "FontDescriptor" => descriptor_id,
            "DW" => font.to_pdf_units(font.advance(0) as i32),
            "W" => widths,
            "CIDToGIDMap" => "Identity",
        }
        .into(),
    )?;

    let to_unicode_id = writer.write_object(Object::Stream(Stream::new(
        Dictionary::new(),
        to_unicode_cmap(used_glyphs).into_bytes(),
    )))?;

    writer.write_object(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => base_font,
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(cid_font_id)],
            "ToUnicode" => to_unicode_id,
        }
        .into(),
    )
}

/// A ToUnicode CMap mapping glyph ids back to the characters drawn with them.
fn to_unicode_cmap(used_glyphs: &BTreeMap<u16, char>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
    );

    let entries: Vec<(&u16, &char)> = used_glyphs.iter().filter(|(gid, _)| **gid != 0).collect();
    // bfchar blocks hold at most 100 entries each.
    for chunk in entries.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (gid, ch) in chunk {
            let mut units = [0u16; 2];
            let utf16: String = ch
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{:04X}", u))
                .collect();
            cmap.push_str(&format!("<{:04X}> <{}>\n", gid, utf16));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
    cmap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_faces_share_one_resource() {
        let mut registry = FontRegistry::default();
        let (a, _) = registry.encode(&FontFace::HELVETICA, "hromada");
        let (b, _) = registry.encode(&FontFace::HELVETICA_BOLD, "hromada");
        let (c, text) = registry.encode(&FontFace::HELVETICA, "“Radist”");
        assert_eq!(a, "F1");
        assert_eq!(b, "F2");
        assert_eq!(c, "F1");
        match text {
            Object::String(bytes, StringFormat::Literal) => {
                assert_eq!(bytes, vec![0x93, b'R', b'a', b'd', b'i', b's', b't', 0x94]);
            }
            other => panic!("unexpected text object: {:?}", other),
        }
    }

    #[test]
    fn cmap_lists_used_glyphs_in_utf16() {
        let mut used = BTreeMap::new();
        used.insert(0, '?');
        used.insert(36, 'A');
        used.insert(512, 'г');
        let cmap = to_unicode_cmap(&used);
        assert!(cmap.contains("2 beginbfchar"));
        assert!(cmap.contains("<0024> <0041>"));
        assert!(cmap.contains("<0200> <0433>"));
        assert!(!cmap.contains("<0000> <003F>"));
    }
}
