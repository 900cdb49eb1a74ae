use crate::logos::LogoCatalog;
use crate::theme::{TextStyle, Theme, palette};
use hromada_layout::{FontRole, wrap_text};
use hromada_render_core::Surface;
use hromada_render_core::utils::anchor_x;
use hromada_types::{Color, Point, Rect, TextAlign};

/// Paints blocks onto a surface using one theme and one set of logos.
///
/// The compositor holds no cursor. Every block takes the current `y` and
/// returns the `y` for the next block; page breaks are left to the caller.
pub struct Compositor<'a, S: Surface + ?Sized> {
    pub(crate) surface: &'a mut S,
    pub(crate) theme: &'a Theme,
    pub(crate) logos: &'a LogoCatalog,
}

impl<'a, S: Surface + ?Sized> Compositor<'a, S> {
    pub fn new(surface: &'a mut S, theme: &'a Theme, logos: &'a LogoCatalog) -> Self {
        Self {
            surface,
            theme,
            logos,
        }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn logos(&self) -> &'a LogoCatalog {
        self.logos
    }

    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    pub fn left(&self) -> f32 {
        self.theme.page.left()
    }

    pub fn content_width(&self) -> f32 {
        self.theme.page.content_width()
    }

    pub fn text_width(&self, text: &str, role: FontRole, size: f32) -> f32 {
        self.theme.font(role).text_width(text, size)
    }

    pub fn wrap(&self, text: &str, role: FontRole, size: f32, max_width: f32) -> Vec<String> {
        wrap_text(text, self.theme.font(role), size, max_width)
    }

    /// Draws one unwrapped string with its `style.align` end on `x`.
    pub fn text_at(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        let theme = self.theme;
        let font = theme.font(style.role);
        let width = font.text_width(text, style.size);
        let origin = Point::new(anchor_x(x, width, style.align), y);
        self.surface
            .draw_text(origin, text, font, style.size, style.color);
    }

    /// Wraps `text` into `style.max_width` and paints one line per leading
    /// step. Returns the baseline after the last line.
    pub fn text_block(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) -> f32 {
        let max_width = style.max_width.unwrap_or_else(|| self.content_width());
        let leading = style.line_height();
        let anchor = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x + max_width / 2.0,
            TextAlign::Right => x + max_width,
        };

        let mut y = y;
        for line in self.wrap(text, style.role, style.size, max_width) {
            self.text_at(anchor, y, &line, style);
            y -= leading;
        }
        y
    }

    /// A dot followed by wrapped text indented 14pt. `style.max_width`
    /// covers dot and text together and defaults to the content width less
    /// 16.
    pub fn bullet(&mut self, x: f32, y: f32, text: &str, dot: Color, style: &TextStyle) -> f32 {
        let max_width = style.max_width.unwrap_or_else(|| self.content_width() - 16.0);
        self.surface.fill_circle(Point::new(x + 4.0, y + 3.0), 2.0, dot);
        let text_style = style.width(max_width - 14.0);
        self.text_block(x + 14.0, y, text, &text_style)
    }

    /// Accent tick plus title at the left margin.
    pub fn section_heading(&mut self, y: f32, title: &str, accent: Color) -> f32 {
        let left = self.left();
        self.surface
            .fill_rect(Rect::new(left, y + 1.0, 3.0, 14.0), accent);
        let style = TextStyle::new(FontRole::HeadSemi, 14.0).color(palette::NAVY);
        self.text_at(left + 12.0, y, title, &style);
        y - 22.0
    }

    pub fn sub_heading(&mut self, y: f32, title: &str, color: Color) -> f32 {
        let style = TextStyle::new(FontRole::HeadSemi, 11.0).color(color);
        let left = self.left();
        self.text_at(left, y, title, &style);
        y - 16.0
    }

    /// Label with a 1.5pt coloured rule as wide as the label beneath it.
    pub fn underlined_heading(&mut self, y: f32, title: &str, color: Color) -> f32 {
        let style = TextStyle::new(FontRole::BodySemi, 10.5).color(palette::NAVY);
        let left = self.left();
        self.text_at(left, y, title, &style);
        let width = self.text_width(title, style.role, style.size);
        let rule_y = y - 4.0;
        self.surface
            .fill_rect(Rect::new(left, rule_y, width, 1.5), color);
        rule_y - 14.0
    }

    /// Thin cream rule from `x` spanning `width`.
    pub fn divider(&mut self, x: f32, y: f32, width: f32) {
        self.surface.stroke_line(
            Point::new(x, y),
            Point::new(x + width, y),
            0.5,
            palette::CREAM_DARK,
        );
    }

    /// Logs a warning if `y` has run past the bottom margin. Layout is
    /// never adjusted.
    pub fn check_overflow(&self, y: f32) -> bool {
        let bottom = self.theme.content_bottom();
        if y < bottom {
            log::warn!(
                "Content on page {} ends at y={:.1}, below the bottom margin ({})",
                self.surface.current_page(),
                y,
                bottom
            );
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hromada_render_core::{DrawOp, RecordingSurface};

    fn setup() -> (RecordingSurface, Theme, LogoCatalog) {
        (RecordingSurface::default(), Theme::default(), LogoCatalog::new())
    }

    #[test]
    fn text_block_steps_by_leading() {
        let (mut surface, theme, logos) = setup();
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let style = TextStyle::body(9.5).leading(15.0).width(120.0);
        let text = "Every project is requested by the community it serves and funded in full.";
        let lines = c.wrap(text, FontRole::Body, 9.5, 120.0).len();
        assert!(lines > 1);

        let y = c.text_block(54.0, 600.0, text, &style);
        assert_eq!(y, 600.0 - lines as f32 * 15.0);

        let texts = surface.texts_on(0);
        assert_eq!(texts.len(), lines);
        assert_eq!(texts[1].0, Point::new(54.0, 585.0));
    }

    #[test]
    fn empty_text_block_keeps_cursor() {
        let (mut surface, theme, logos) = setup();
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        assert_eq!(c.text_block(54.0, 400.0, "   ", &TextStyle::default()), 400.0);
        assert_eq!(surface.ops().count(), 0);
    }

    #[test]
    fn aligned_lines_anchor_inside_width() {
        let (mut surface, theme, logos) = setup();
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let right = TextStyle::body(10.0).width(200.0).align(TextAlign::Right);
        c.text_block(100.0, 500.0, "Lutsk", &right);
        let width = c.text_width("Lutsk", FontRole::Body, 10.0);

        let centred = TextStyle::body(10.0).width(200.0).align(TextAlign::Center);
        c.text_block(100.0, 480.0, "Lutsk", &centred);

        let texts = surface.texts_on(0);
        assert!((texts[0].0.x - (300.0 - width)).abs() < 1e-3);
        assert!((texts[1].0.x - (200.0 - width / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn bullet_indents_text_and_places_dot() {
        let (mut surface, theme, logos) = setup();
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let y = c.bullet(54.0, 500.0, "Sanctions screening", palette::TERRACOTTA, &TextStyle::body(9.5));
        assert!((y - (500.0 - 9.5 * 1.55)).abs() < 1e-3);

        let ops: Vec<_> = surface.ops().cloned().collect();
        assert_eq!(
            ops[0],
            DrawOp::Circle {
                center: Point::new(58.0, 503.0),
                radius: 2.0,
                color: palette::TERRACOTTA
            }
        );
        assert_eq!(surface.texts_on(0)[0].0, Point::new(68.0, 500.0));
    }

    #[test]
    fn headings_return_fixed_advances() {
        let (mut surface, theme, logos) = setup();
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        assert_eq!(c.section_heading(698.0, "What is Hromada", palette::UKRAINE_BLUE), 676.0);
        assert_eq!(c.sub_heading(676.0, "Project Categories", palette::NAVY), 660.0);
        assert_eq!(c.underlined_heading(660.0, "Donor Accountability", palette::TERRACOTTA), 642.0);

        let first = surface.ops().next().cloned();
        assert_eq!(
            first,
            Some(DrawOp::Rect {
                rect: Rect::new(54.0, 699.0, 3.0, 14.0),
                color: palette::UKRAINE_BLUE
            })
        );
        assert_eq!(surface.texts_on(0)[0].0, Point::new(66.0, 698.0));
    }

    #[test]
    fn overflow_is_reported_not_fixed() {
        let (mut surface, theme, logos) = setup();
        let c = Compositor::new(&mut surface, &theme, &logos);
        assert!(!c.check_overflow(80.0));
        assert!(c.check_overflow(40.0));
    }
}
