use crate::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// US Letter in points.
pub const LETTER: Size = Size::new(612.0, 792.0);

/// Fixed page frame every primitive lays out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub size: Size,
    pub margins: Margins,
}

impl Default for PageGeometry {
    /// US Letter with 0.75in margins.
    fn default() -> Self {
        Self::new(LETTER, Margins::all(54.0))
    }
}

impl PageGeometry {
    pub const fn new(size: Size, margins: Margins) -> Self {
        Self { size, margins }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn content_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }

    pub fn left(&self) -> f32 {
        self.margins.left
    }

    pub fn right(&self) -> f32 {
        self.size.width - self.margins.right
    }

    pub fn center_x(&self) -> f32 {
        self.size.width / 2.0
    }
}
