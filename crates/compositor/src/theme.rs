use hromada_layout::{FontFace, FontRole, FontSet};
use hromada_types::{Color, PageGeometry, TextAlign};

/// Brand palette.
pub mod palette {
    use hromada_types::Color;

    pub const NAVY: Color = Color::from_u32(0x2C3E50);
    pub const NAVY_80: Color = Color::from_u32(0x566D7E);
    pub const CREAM: Color = Color::from_u32(0xF5F1E8);
    pub const CREAM_DARK: Color = Color::from_u32(0xE2DCCE);
    pub const UKRAINE_BLUE: Color = Color::from_u32(0x005BBB);
    pub const TERRACOTTA: Color = Color::from_u32(0xD4754E);
    pub const GOLD: Color = Color::from_u32(0xE6A855);
    pub const CHARCOAL: Color = Color::from_u32(0x3A3633);
    pub const CHARCOAL_60: Color = Color::from_u32(0x807A73);
    pub const WHITE: Color = Color::WHITE;
    pub const LIGHT_BG: Color = Color::from_u32(0xFAFAF7);
    pub const GREEN: Color = Color::from_u32(0x3D7A4A);
    pub const RED_SOFT: Color = Color::from_u32(0xB8493D);

    pub const CAT_HOSPITAL: Color = Color::from_u32(0xC75B39);
    pub const CAT_SCHOOL: Color = Color::from_u32(0x7B9E6B);
    pub const CAT_WATER: Color = Color::from_u32(0x5B8FA8);
    pub const CAT_ENERGY: Color = Color::from_u32(0xD4954A);
    pub const CAT_OTHER: Color = Color::from_u32(0x8B7355);

    /// Secondary line of the call-to-action block.
    pub const CTA_SUBLINE: Color = Color::from_u32(0xC8D6E5);
    /// Quote box fill.
    pub const CALLOUT_TINT: Color = Color::from_u32(0xEDF1F7);
    pub const COVER_MUTED: Color = Color::from_u32(0x8FA4BD);
    pub const COVER_INFO: Color = Color::from_u32(0x6B8DB5);
    pub const COVER_DATE: Color = Color::from_u32(0x4F7DA8);
}

/// Height of the navy header strip on content pages.
pub const HEADER_HEIGHT: f32 = 40.0;

/// Immutable styling shared by every primitive: page frame and fonts.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub page: PageGeometry,
    pub fonts: FontSet,
}

impl Theme {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            page: PageGeometry::default(),
            fonts,
        }
    }

    pub fn font(&self, role: FontRole) -> &FontFace {
        self.fonts.get(role)
    }

    /// First baseline below the header bar.
    pub fn content_top(&self) -> f32 {
        self.page.height() - self.page.margins.top - HEADER_HEIGHT
    }

    pub fn content_bottom(&self) -> f32 {
        self.page.margins.bottom
    }
}

/// Font, size, colour and wrapping parameters for a run of text.
///
/// `leading` defaults to `size * 1.55` and `max_width` to the content
/// width. In [`Compositor::text_block`](crate::Compositor::text_block),
/// `align` positions each line inside `max_width`; for single strings
/// drawn with [`Compositor::text_at`](crate::Compositor::text_at) it says
/// which end of the string sits on `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: f32,
    pub color: Color,
    pub leading: Option<f32>,
    pub max_width: Option<f32>,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(FontRole::Body, 10.0)
    }
}

impl TextStyle {
    pub const fn new(role: FontRole, size: f32) -> Self {
        Self {
            role,
            size,
            color: palette::CHARCOAL,
            leading: None,
            max_width: None,
            align: TextAlign::Left,
        }
    }

    pub const fn body(size: f32) -> Self {
        Self::new(FontRole::Body, size)
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn leading(mut self, leading: f32) -> Self {
        self.leading = Some(leading);
        self
    }

    pub const fn width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.leading.unwrap_or(self.size * 1.55)
    }
}
