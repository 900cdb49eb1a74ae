use crate::error::RenderError;
use crate::traits::Surface;
use crate::types::{DocumentInfo, ImageAsset};
use hromada_layout::FontFace;
use hromada_types::{Color, PageGeometry, Point, Rect, Size};

/// One captured paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Color,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    Text {
        origin: Point,
        text: String,
        font: String,
        size: f32,
        color: Color,
    },
    Image {
        name: String,
        rect: Rect,
    },
}

/// A surface that keeps every operation in memory, page by page.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pages: Vec<Vec<DrawOp>>,
    info: DocumentInfo,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(PageGeometry::default().size)
    }
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: vec![Vec::new()],
            info: DocumentInfo::default(),
        }
    }

    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    /// All operations across every page, in paint order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flatten()
    }

    /// Text runs on one page (0-based) as `(origin, text)`.
    pub fn texts_on(&self, page: usize) -> Vec<(Point, &str)> {
        self.pages
            .get(page)
            .into_iter()
            .flatten()
            .filter_map(|op| match op {
                DrawOp::Text { origin, text, .. } => Some((*origin, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Names of images drawn anywhere, in paint order.
    pub fn image_names(&self) -> Vec<&str> {
        self.ops()
            .filter_map(|op| match op {
                DrawOp::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.push(op);
        }
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn current_page(&self) -> usize {
        self.pages.len()
    }

    fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawOp::Rect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push(DrawOp::RoundRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, font: &FontFace, size: f32, color: Color) {
        self.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            font: font.name().to_string(),
            size,
            color,
        });
    }

    fn draw_image(&mut self, image: &ImageAsset, rect: Rect) -> Result<(), RenderError> {
        self.push(DrawOp::Image {
            name: image.name.clone(),
            rect,
        });
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.pages.push(Vec::new());
        Ok(())
    }
}
