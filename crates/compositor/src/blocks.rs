use crate::compositor::Compositor;
use crate::theme::{TextStyle, palette};
use hromada_layout::FontRole;
use hromada_render_core::Surface;
use hromada_types::{Color, Point, Rect, TextAlign};

/// A headline figure with its caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

impl<'a> Stat<'a> {
    pub const fn new(value: &'a str, label: &'a str) -> Self {
        Self { value, label }
    }
}

/// Type sizes and colours for a stat row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatStyle {
    pub value_size: f32,
    pub value_color: Color,
    pub label_size: f32,
    pub label_color: Color,
    /// Distance from the value baseline down to the label baseline.
    pub label_drop: f32,
}

impl Default for StatStyle {
    fn default() -> Self {
        Self {
            value_size: 22.0,
            value_color: palette::UKRAINE_BLUE,
            label_size: 8.0,
            label_color: palette::CHARCOAL_60,
            label_drop: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectCard<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub cost: &'a str,
    pub kind: &'a str,
    pub accent: Color,
    pub partner: Option<&'a str>,
}

impl ProjectCard<'_> {
    /// Lines of text on the card: name and details, plus the partner.
    pub fn line_count(&self) -> usize {
        if self.partner.is_some() { 3 } else { 2 }
    }

    pub fn height(&self) -> f32 {
        14.0 + self.line_count() as f32 * 14.0 + 8.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'a> {
    pub color: Color,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> Step<'a> {
    pub const fn new(color: Color, title: &'a str, description: &'a str) -> Self {
        Self {
            color,
            title,
            description,
        }
    }
}

/// Navy banner with a centred headline and contact line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallToAction<'a> {
    pub headline: &'a str,
    pub headline_size: f32,
    pub subline: &'a str,
    pub height: f32,
}

const CARD_GAP: f32 = 6.0;
const CALLOUT_HEIGHT: f32 = 54.0;

impl<S: Surface + ?Sized> Compositor<'_, S> {
    /// Splits the content width evenly and centres each stat in its column.
    pub fn stat_row(&mut self, y: f32, stats: &[Stat<'_>], style: &StatStyle) -> f32 {
        if stats.is_empty() {
            return y;
        }
        let col_w = self.content_width() / stats.len() as f32;
        let value_style = TextStyle::new(FontRole::HeadSemi, style.value_size)
            .color(style.value_color)
            .align(TextAlign::Center);
        let label_style = TextStyle::body(style.label_size)
            .color(style.label_color)
            .align(TextAlign::Center);

        for (i, stat) in stats.iter().enumerate() {
            let cx = self.left() + i as f32 * col_w + col_w / 2.0;
            self.text_at(cx, y, stat.value, &value_style);
            self.text_at(cx, y - style.label_drop, stat.label, &label_style);
        }
        y - 40.0
    }

    /// A full-width project card at the left margin.
    pub fn project_card(&mut self, y: f32, card: &ProjectCard<'_>) -> f32 {
        let (left, width) = (self.left(), self.content_width());
        self.project_card_at(left, y, width, card)
    }

    pub fn project_card_at(&mut self, x: f32, y: f32, width: f32, card: &ProjectCard<'_>) -> f32 {
        let card_h = card.height();
        let bottom = y - card_h;
        self.surface
            .fill_round_rect(Rect::new(x, bottom, width, card_h), 3.0, palette::LIGHT_BG);
        self.surface
            .fill_rect(Rect::new(x, bottom, 3.0, card_h), card.accent);

        let text_x = x + 14.0;
        let text_y = y - 16.0;
        let name = TextStyle::new(FontRole::BodySemi, 10.0).color(palette::NAVY);
        self.text_at(text_x, text_y, card.name, &name);

        let detail = TextStyle::body(8.5).color(palette::CHARCOAL_60);
        let details = format!("{}  \u{2022}  {}", card.location, card.kind);
        self.text_at(text_x, text_y - 14.0, &details, &detail);
        if let Some(partner) = card.partner {
            self.text_at(text_x, text_y - 28.0, &format!("Partner: {}", partner), &detail);
        }

        let cost = TextStyle::new(FontRole::HeadSemi, 13.0)
            .color(card.accent)
            .align(TextAlign::Right);
        self.text_at(x + width - 12.0, text_y - 2.0, card.cost, &cost);

        bottom - CARD_GAP
    }

    /// Numbered circle, title and wrapped description. `number` is the
    /// 1-based position shown in the circle.
    pub fn numbered_step(&mut self, y: f32, number: usize, step: &Step<'_>) -> f32 {
        let left = self.left();
        let center = Point::new(left + 12.0, y + 4.0);
        self.surface.fill_circle(center, 11.0, step.color);

        let digit = TextStyle::new(FontRole::HeadSemi, 10.0)
            .color(palette::WHITE)
            .align(TextAlign::Center);
        self.text_at(center.x, center.y - 3.5, &number.to_string(), &digit);

        let text_x = left + 32.0;
        let title = TextStyle::new(FontRole::BodySemi, 10.0).color(palette::NAVY);
        self.text_at(text_x, y + 2.0, step.title, &title);

        let description = TextStyle::body(8.5)
            .color(palette::CHARCOAL_60)
            .leading(13.0)
            .width(self.content_width() - 38.0);
        self.text_block(text_x, y - 13.0, step.description, &description) - 6.0
    }

    /// Tinted quote box with an accent stripe.
    pub fn callout(&mut self, y: f32, text: &str, accent: Color) -> f32 {
        let (left, width) = (self.left(), self.content_width());
        let bottom = y - CALLOUT_HEIGHT;
        self.surface.fill_round_rect(
            Rect::new(left, bottom, width, CALLOUT_HEIGHT),
            3.0,
            palette::CALLOUT_TINT,
        );
        self.surface
            .fill_rect(Rect::new(left, bottom, 3.0, CALLOUT_HEIGHT), accent);

        let style = TextStyle::new(FontRole::BodySemi, 10.5)
            .color(palette::NAVY)
            .width(width - 28.0)
            .leading(16.0);
        self.text_block(left + 16.0, y - 14.0, text, &style);
        bottom - 14.0
    }

    /// Draws the banner with its bottom edge at `bottom`.
    pub fn call_to_action(&mut self, bottom: f32, cta: &CallToAction<'_>) {
        let (left, width) = (self.left(), self.content_width());
        self.surface.fill_round_rect(
            Rect::new(left, bottom, width, cta.height),
            4.0,
            palette::NAVY,
        );

        let center_x = self.theme.page.center_x();
        let headline = TextStyle::new(FontRole::HeadSemi, cta.headline_size)
            .color(palette::WHITE)
            .align(TextAlign::Center);
        self.text_at(center_x, bottom + 28.0, cta.headline, &headline);

        let subline = TextStyle::body(9.0)
            .color(palette::CTA_SUBLINE)
            .align(TextAlign::Center);
        self.text_at(center_x, bottom + 10.0, cta.subline, &subline);
    }

    /// A row of coloured dots with labels, left to right from the margin.
    pub fn legend(&mut self, y: f32, entries: &[(&str, Color)]) -> f32 {
        let label = TextStyle::body(8.5).color(palette::CHARCOAL);
        let mut x = self.left();
        for (text, color) in entries {
            self.surface
                .fill_circle(Point::new(x + 5.0, y + 3.0), 4.0, *color);
            self.text_at(x + 14.0, y, text, &label);
            x += self.text_width(text, label.role, label.size) + 30.0;
        }
        y - 22.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logos::LogoCatalog;
    use crate::theme::Theme;
    use hromada_render_core::{DrawOp, RecordingSurface};

    fn card(partner: Option<&str>) -> ProjectCard<'_> {
        ProjectCard {
            name: "Prylymanskyi Lyceum",
            location: "Odesa Oblast",
            cost: "$18,000",
            kind: "36kW Solar PV",
            accent: palette::CAT_SCHOOL,
            partner,
        }
    }

    #[test]
    fn card_height_depends_on_partner_line() {
        assert_eq!(card(None).height(), 50.0);
        assert_eq!(card(Some("NGO Ecoaction")).height(), 64.0);
    }

    #[test]
    fn stacked_cards_leave_only_the_gap() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);

        let y1 = c.project_card(600.0, &card(None));
        let y2 = c.project_card(y1, &card(Some("NGO Ecoclub")));
        assert_eq!(y1, 600.0 - 50.0 - 6.0);
        assert_eq!(y2, y1 - 64.0 - 6.0);

        let backgrounds: Vec<Rect> = surface
            .ops()
            .filter_map(|op| match op {
                DrawOp::RoundRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(backgrounds[0].top() - backgrounds[1].top(), 56.0);
        assert_eq!(backgrounds[0].y - backgrounds[1].top(), 6.0);

        let texts = surface.texts_on(0);
        assert!(texts.iter().any(|(_, t)| *t == "Odesa Oblast  \u{2022}  36kW Solar PV"));
        assert!(texts.iter().any(|(_, t)| *t == "Partner: NGO Ecoclub"));
    }

    #[test]
    fn card_cost_is_right_aligned() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        c.project_card(600.0, &card(None));
        let cost_w = theme.fonts.head_semi.text_width("$18,000", 13.0);

        let texts = surface.texts_on(0);
        let (origin, _) = texts.iter().find(|(_, t)| *t == "$18,000").unwrap();
        assert!((origin.x + cost_w - 546.0).abs() < 1e-3);
        assert_eq!(origin.y, 582.0);
    }

    #[test]
    fn stat_row_centres_columns_and_advances_forty() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let stats = [
            Stat::new("66", "projects"),
            Stat::new("$6.8M", "total pipeline"),
            Stat::new("44", "under $50K"),
            Stat::new("5", "NGO partners"),
        ];
        assert_eq!(c.stat_row(300.0, &stats, &StatStyle::default()), 260.0);
        assert_eq!(c.stat_row(300.0, &[], &StatStyle::default()), 300.0);

        let width = theme.fonts.head_semi.text_width("66", 22.0);
        let texts = surface.texts_on(0);
        assert_eq!(texts.len(), 8);
        assert!((texts[0].0.x - (54.0 + 63.0 - width / 2.0)).abs() < 1e-3);
        assert_eq!(texts[1].0.y, 284.0);
    }

    #[test]
    fn numbered_step_layout() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let step = Step::new(palette::CAT_WATER, "Community Request", "Short.");
        let y = c.numbered_step(600.0, 1, &step);
        assert_eq!(y, 600.0 - 13.0 - 13.0 - 6.0);

        let ops: Vec<_> = surface.ops().cloned().collect();
        assert_eq!(
            ops[0],
            DrawOp::Circle {
                center: Point::new(66.0, 604.0),
                radius: 11.0,
                color: palette::CAT_WATER
            }
        );
        let texts = surface.texts_on(0);
        assert_eq!(texts[0].1, "1");
        assert_eq!(texts[0].0.y, 600.5);
        assert_eq!(texts[1].0, Point::new(86.0, 602.0));
        assert_eq!(texts[2].0, Point::new(86.0, 587.0));
    }

    #[test]
    fn callout_and_legend_advances() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        assert_eq!(c.callout(500.0, "A school with its own solar array.", palette::UKRAINE_BLUE), 432.0);
        assert_eq!(
            c.legend(400.0, &[("Energy", palette::CAT_ENERGY), ("Other", palette::CAT_OTHER)]),
            378.0
        );

        let energy_w = theme.fonts.body.text_width("Energy", 8.5);
        let texts = surface.texts_on(0);
        let other = texts.iter().find(|(_, t)| *t == "Other").unwrap();
        assert!((other.0.x - (54.0 + energy_w + 30.0 + 14.0)).abs() < 1e-3);
    }

    #[test]
    fn call_to_action_centres_both_lines() {
        let mut surface = RecordingSurface::default();
        let (theme, logos) = (Theme::default(), LogoCatalog::new());
        let mut c = Compositor::new(&mut surface, &theme, &logos);
        let cta = CallToAction {
            headline: "Browse projects at hromadaproject.org",
            headline_size: 12.0,
            subline: "Book a consultation: contact@hromadaproject.org",
            height: 46.0,
        };
        c.call_to_action(78.0, &cta);

        let texts = surface.texts_on(0);
        let headline_w = theme.fonts.head_semi.text_width(cta.headline, 12.0);
        assert!((texts[0].0.x - (306.0 - headline_w / 2.0)).abs() < 1e-3);
        assert_eq!(texts[0].0.y, 106.0);
        assert_eq!(texts[1].0.y, 88.0);
    }
}
