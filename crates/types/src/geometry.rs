/// A point in PDF user space (origin bottom-left, y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Largest rectangle with the given aspect ratio that fits inside `self`,
    /// centred on both axes.
    pub fn fit_centered(&self, aspect: f32) -> Rect {
        if !(aspect.is_finite() && aspect > 0.0) || self.height <= 0.0 {
            return *self;
        }
        let own = self.width / self.height;
        if aspect > own {
            let h = self.width / aspect;
            Rect::new(self.x, self.y + (self.height - h) / 2.0, self.width, h)
        } else {
            let w = self.height * aspect;
            Rect::new(self.x + (self.width - w) / 2.0, self.y, w, self.height)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; a degenerate height yields a square.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
