//! Font faces and the per-run font set.
//!
//! A [`FontFace`] is either one of the standard base fonts (metrics built in,
//! nothing embedded) or a TrueType face parsed with `ttf-parser` that the PDF
//! backend embeds. [`FontSet`] maps the six typographic roles the documents
//! use onto faces and is resolved once per run.

use crate::FontError;
use crate::metrics::StandardFont;
use hromada_traits::ResourceProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// A parsed TrueType face ready for measurement and embedding.
pub struct EmbeddedFont {
    pub postscript_name: String,
    pub data: Arc<Vec<u8>>,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub cap_height: i16,
    pub italic_angle: f32,
    /// `[x_min, y_min, x_max, y_max]` in font units.
    pub bbox: [i16; 4],
    cmap: HashMap<char, u16>,
    advances: Vec<u16>,
}

impl std::fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .field("glyphs", &self.advances.len())
            .finish()
    }
}

impl EmbeddedFont {
    /// Parses a TrueType/OpenType face. `label` names the source in errors;
    /// its file stem stands in for the PostScript name if the face has none.
    pub fn parse(label: &str, data: Arc<Vec<u8>>) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::InvalidData {
            name: label.to_string(),
            message: e.to_string(),
        })?;

        let mut cmap = HashMap::new();
        if let Some(table) = face.tables().cmap {
            for subtable in table.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if let (Some(ch), Some(gid)) = (char::from_u32(cp), subtable.glyph_index(cp)) {
                        cmap.entry(ch).or_insert(gid.0);
                    }
                });
            }
        }

        let advances = (0..face.number_of_glyphs())
            .map(|gid| face.glyph_hor_advance(ttf_parser::GlyphId(gid)).unwrap_or(0))
            .collect();

        let postscript_name = extract_postscript_name(&face).unwrap_or_else(|| {
            let name = name_from_label(label);
            log::debug!("No usable name table entry in '{}', using '{}'", label, name);
            name
        });
        let bbox = face.global_bounding_box();

        log::debug!(
            "Parsed font '{}' ({} glyphs, {} mapped chars)",
            postscript_name,
            face.number_of_glyphs(),
            cmap.len()
        );

        Ok(Self {
            postscript_name,
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            cap_height: face.capital_height().unwrap_or_else(|| face.ascender()),
            italic_angle: face.italic_angle(),
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            cmap,
            advances,
            data,
        })
    }

    /// Glyph id for a character; unmapped characters use `.notdef` (0).
    pub fn glyph_id(&self, ch: char) -> u16 {
        self.cmap.get(&ch).copied().unwrap_or(0)
    }

    /// Horizontal advance of a glyph in font units.
    pub fn advance(&self, gid: u16) -> u16 {
        self.advances.get(gid as usize).copied().unwrap_or(0)
    }

    /// Converts font units to the 1/1000 em glyph space PDF widths use.
    pub fn to_pdf_units(&self, value: i32) -> i32 {
        if self.units_per_em == 0 {
            return value;
        }
        (value as f32 * 1000.0 / self.units_per_em as f32).round() as i32
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        if self.units_per_em == 0 {
            return 0.0;
        }
        let units: u32 = text
            .chars()
            .map(|ch| self.advance(self.glyph_id(ch)) as u32)
            .sum();
        units as f32 * size / self.units_per_em as f32
    }
}

/// Name table lookup: PostScript name, then full name, then family.
///
/// Records that cannot be decoded (Mac Roman entries usually come first) are
/// skipped rather than ending the search.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let lookup = |id: u16| {
        face.names()
            .into_iter()
            .filter(|n| n.name_id == id)
            .filter_map(|n| n.to_string())
            .map(|n| sanitize_name(&n))
            .find(|n| !n.is_empty())
    };

    lookup(ttf_parser::name_id::POST_SCRIPT_NAME)
        .or_else(|| lookup(ttf_parser::name_id::FULL_NAME))
        .or_else(|| lookup(ttf_parser::name_id::FAMILY))
}

/// Keeps the characters a PostScript font name may carry.
fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'))
        .collect()
}

/// `docs/fonts/Outfit-Bold.ttf` -> `Outfit-Bold`.
fn name_from_label(label: &str) -> String {
    let file = label.rsplit(['/', '\\']).next().unwrap_or(label);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    let name = sanitize_name(stem);
    if name.is_empty() { "EmbeddedFont".to_string() } else { name }
}

/// A face the compositor can draw with.
#[derive(Debug, Clone)]
pub enum FontFace {
    Standard(StandardFont),
    Embedded(Arc<EmbeddedFont>),
}

impl FontFace {
    pub const HELVETICA: FontFace = FontFace::Standard(StandardFont::Helvetica);
    pub const HELVETICA_BOLD: FontFace = FontFace::Standard(StandardFont::HelveticaBold);

    /// The `BaseFont` name this face is written under.
    pub fn name(&self) -> &str {
        match self {
            FontFace::Standard(std) => std.base_name(),
            FontFace::Embedded(font) => &font.postscript_name,
        }
    }

    /// Advance width of `text` at `size` points, without kerning.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match self {
            FontFace::Standard(std) => std.text_width(text, size),
            FontFace::Embedded(font) => font.text_width(text, size),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, FontFace::Embedded(_))
    }
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for FontFace {}

/// The typographic roles used across both documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Head,
    HeadSemi,
    HeadReg,
    Body,
    BodySemi,
    BodyBold,
}

impl FontRole {
    pub const ALL: [FontRole; 6] = [
        FontRole::Body,
        FontRole::BodySemi,
        FontRole::BodyBold,
        FontRole::HeadReg,
        FontRole::HeadSemi,
        FontRole::Head,
    ];

    /// File name of the TrueType face for this role.
    pub fn file_name(&self) -> &'static str {
        match self {
            FontRole::Head => "Outfit-Bold.ttf",
            FontRole::HeadSemi => "Outfit-SemiBold.ttf",
            FontRole::HeadReg => "Outfit-Regular.ttf",
            FontRole::Body => "Inter-Regular.ttf",
            FontRole::BodySemi => "Inter-SemiBold.ttf",
            FontRole::BodyBold => "Inter-Bold.ttf",
        }
    }

    /// Base font used when the embedded set is unavailable.
    pub fn fallback(&self) -> FontFace {
        match self {
            FontRole::HeadReg | FontRole::Body => FontFace::HELVETICA,
            _ => FontFace::HELVETICA_BOLD,
        }
    }
}

/// Faces for every role, resolved once per run.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub head: FontFace,
    pub head_semi: FontFace,
    pub head_reg: FontFace,
    pub body: FontFace,
    pub body_semi: FontFace,
    pub body_bold: FontFace,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::fallback()
    }
}

impl FontSet {
    /// The all-Helvetica set.
    pub fn fallback() -> Self {
        Self::from_fn(|role| role.fallback())
    }

    fn from_fn(mut f: impl FnMut(FontRole) -> FontFace) -> Self {
        Self {
            head: f(FontRole::Head),
            head_semi: f(FontRole::HeadSemi),
            head_reg: f(FontRole::HeadReg),
            body: f(FontRole::Body),
            body_semi: f(FontRole::BodySemi),
            body_bold: f(FontRole::BodyBold),
        }
    }

    /// Loads the six TrueType faces from `font_dir`.
    ///
    /// If any file is absent the whole set falls back to Helvetica, so the
    /// documents never mix families. A file that is present but unparsable
    /// is an error.
    pub fn load(provider: &dyn ResourceProvider, font_dir: &str) -> Result<Self, FontError> {
        let mut found = Vec::with_capacity(FontRole::ALL.len());
        let mut complete = true;

        for role in FontRole::ALL {
            let path = font_path(font_dir, role.file_name());
            match provider.load_optional(&path)? {
                Some(data) => found.push((role, path, data)),
                None => {
                    log::warn!("{} not found, falling back to Helvetica", path);
                    complete = false;
                }
            }
        }

        if !complete {
            log::info!("Using Helvetica fallback fonts");
            return Ok(Self::fallback());
        }

        let mut loaded = HashMap::new();
        for (role, path, data) in found {
            let face = EmbeddedFont::parse(&path, data)?;
            loaded.insert(role, FontFace::Embedded(Arc::new(face)));
        }

        log::debug!("Resolved embedded font set from '{}'", font_dir);
        Ok(Self::from_fn(|role| {
            loaded.remove(&role).unwrap_or_else(|| role.fallback())
        }))
    }

    pub fn get(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Head => &self.head,
            FontRole::HeadSemi => &self.head_semi,
            FontRole::HeadReg => &self.head_reg,
            FontRole::Body => &self.body,
            FontRole::BodySemi => &self.body_semi,
            FontRole::BodyBold => &self.body_bold,
        }
    }

    pub fn is_fallback(&self) -> bool {
        FontRole::ALL.iter().all(|role| !self.get(*role).is_embedded())
    }
}

fn font_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
