use crate::compositor::Compositor;
use crate::theme::{TextStyle, palette};
use hromada_layout::FontRole;
use hromada_render_core::Surface;
use hromada_types::{Color, Point, Rect, TextAlign};

const PAD_Y: f32 = 7.0;
const PAD_X: f32 = 8.0;
const HEADER_SIZE: f32 = 8.0;
const BODY_SIZE: f32 = 9.0;

/// Width, alignment and body-cell styling for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub width: f32,
    pub align: TextAlign,
    pub body_font: FontRole,
    pub body_color: Color,
}

impl Column {
    pub const fn new(width: f32, align: TextAlign) -> Self {
        Self {
            width,
            align,
            body_font: FontRole::Body,
            body_color: palette::CHARCOAL,
        }
    }

    pub const fn emphasis(mut self, font: FontRole, color: Color) -> Self {
        self.body_font = font;
        self.body_color = color;
        self
    }
}

/// A header row over striped body rows.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    pub columns: &'a [Column],
    pub header: &'a [&'a str],
    pub rows: &'a [&'a [&'a str]],
}

impl Table<'_> {
    pub fn width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn header_height() -> f32 {
        row_height(HEADER_SIZE)
    }

    pub fn body_row_height() -> f32 {
        row_height(BODY_SIZE)
    }

    pub fn height(&self) -> f32 {
        Self::header_height() + self.rows.len() as f32 * Self::body_row_height()
    }
}

/// One line of text at `size` with 1.2 leading inside the vertical padding.
fn row_height(size: f32) -> f32 {
    size * 1.2 + 2.0 * PAD_Y
}

impl<S: Surface + ?Sized> Compositor<'_, S> {
    /// Draws `table` centred in the content width with its top edge at `y`.
    pub fn table(&mut self, y: f32, table: &Table<'_>) -> f32 {
        let table_w = table.width();
        let x0 = self.left() + (self.content_width() - table_w) / 2.0;

        let header_h = Table::header_height();
        let header_bottom = y - header_h;
        self.surface
            .fill_rect(Rect::new(x0, header_bottom, table_w, header_h), palette::NAVY);
        let header_style = TextStyle::new(FontRole::BodySemi, HEADER_SIZE).color(palette::WHITE);
        self.table_row(x0, header_bottom, table.columns, table.header, |_| header_style);

        let row_h = Table::body_row_height();
        let mut bottom = header_bottom;
        for (i, row) in table.rows.iter().enumerate() {
            let top = bottom;
            bottom = top - row_h;
            let fill = if i % 2 == 0 { palette::WHITE } else { palette::LIGHT_BG };
            self.surface
                .fill_rect(Rect::new(x0, bottom, table_w, row_h), fill);
            self.table_row(x0, bottom, table.columns, row, |column| {
                TextStyle::new(column.body_font, BODY_SIZE).color(column.body_color)
            });
            self.rule(x0, bottom, table_w, 0.25, palette::CREAM_DARK);
        }

        self.rule(x0, header_bottom, table_w, 0.5, palette::NAVY);
        if !table.rows.is_empty() {
            self.rule(x0, bottom, table_w, 0.5, palette::CREAM_DARK);
        }

        y - table.height() - 4.0
    }

    fn table_row(
        &mut self,
        x0: f32,
        bottom: f32,
        columns: &[Column],
        cells: &[&str],
        style_for: impl Fn(&Column) -> TextStyle,
    ) {
        let mut x = x0;
        for (column, cell) in columns.iter().zip(cells) {
            let style = style_for(column).align(column.align);
            let baseline = bottom + PAD_Y + 0.2 * style.size;
            let anchor = match column.align {
                TextAlign::Left => x + PAD_X,
                TextAlign::Center => x + column.width / 2.0,
                TextAlign::Right => x + column.width - PAD_X,
            };
            self.text_at(anchor, baseline, cell, &style);
            x += column.width;
        }
    }

    fn rule(&mut self, x: f32, y: f32, width: f32, line_width: f32, color: Color) {
        self.surface
            .stroke_line(Point::new(x, y), Point::new(x + width, y), line_width, color);
    }
}
