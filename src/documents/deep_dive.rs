use super::content::*;
use super::{content_page, end_page, fee_section};
use hromada_compositor::{CallToAction, Compositor, StatStyle, TextStyle, palette};
use hromada_layout::FontRole;
use hromada_render_core::{RenderError, Surface};
use hromada_types::{Point, Rect, TextAlign};

pub(super) const PAGES: usize = 6;

const COVER_LOGO_SIZE: f32 = 56.0;
const COVER_RULE_WIDTH: f32 = 80.0;
const CTA_HEIGHT: f32 = 48.0;
const CTA_MIN_BOTTOM: f32 = 80.0;
/// Below this cursor the banner is pinned to its lowest position.
const CTA_PIN_THRESHOLD: f32 = 134.0;

pub(super) fn compose<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<(), RenderError> {
    cover(c)?;
    c.surface().show_page()?;

    let y = problem_page(c)?;
    end_page(c, y)?;
    let y = process_page(c)?;
    end_page(c, y)?;
    let y = accountability_page(c)?;
    end_page(c, y)?;
    let y = pipeline_page(c)?;
    end_page(c, y)?;
    closing_page(c)
}

/// Full-bleed navy cover. No header bar or footer.
fn cover<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<(), RenderError> {
    let page = c.theme().page;
    let (w, h) = (page.width(), page.height());
    let cx = page.center_x();

    c.surface().fill_rect(Rect::new(0.0, 0.0, w, h), palette::NAVY);
    c.surface()
        .fill_rect(Rect::new(0.0, h - 4.0, w, 4.0), palette::UKRAINE_BLUE);

    if let Some(logo) = c.logos().primary() {
        let rect = Rect::new(
            (w - COVER_LOGO_SIZE) / 2.0,
            h - 170.0,
            COVER_LOGO_SIZE,
            COVER_LOGO_SIZE,
        );
        c.surface().draw_image(logo, rect)?;
    }

    let wordmark = TextStyle::new(FontRole::Head, 36.0)
        .color(palette::CREAM)
        .align(TextAlign::Center);
    c.text_at(cx, h - 210.0, "hromada", &wordmark);

    let subtitle = TextStyle::body(10.0)
        .color(palette::COVER_MUTED)
        .align(TextAlign::Center);
    c.text_at(cx, h - 230.0, COVER_SUBTITLE, &subtitle);

    c.surface().stroke_line(
        Point::new((w - COVER_RULE_WIDTH) / 2.0, h - 260.0),
        Point::new((w + COVER_RULE_WIDTH) / 2.0, h - 260.0),
        1.5,
        palette::UKRAINE_BLUE,
    );

    let title = TextStyle::new(FontRole::HeadSemi, 18.0)
        .color(palette::WHITE)
        .align(TextAlign::Center);
    for (i, line) in COVER_TITLE.iter().enumerate() {
        c.text_at(cx, h - 300.0 - 24.0 * i as f32, line, &title);
    }

    let stats = StatStyle {
        value_size: 26.0,
        value_color: palette::GOLD,
        label_size: 8.5,
        label_color: palette::COVER_MUTED,
        label_drop: 20.0,
    };
    c.stat_row(h - 400.0, COVER_STATS, &stats);

    let info = TextStyle::body(8.5)
        .color(palette::COVER_INFO)
        .align(TextAlign::Center);
    c.text_at(cx, 100.0, COVER_SPONSOR, &info);
    c.text_at(cx, 84.0, COVER_CONTACT, &info);
    let date = TextStyle::body(8.0)
        .color(palette::COVER_DATE)
        .align(TextAlign::Center);
    c.text_at(cx, 62.0, COVER_DATE, &date);
    Ok(())
}

fn problem_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<f32, RenderError> {
    let left = c.left();
    let mut y = content_page(c, 2, PAGES)?;

    y = c.section_heading(y, "The Problem", palette::TERRACOTTA);
    y = c.text_block(left, y, PROBLEM, &TextStyle::body(10.0).leading(16.0)) - 10.0;
    let lead = TextStyle::new(FontRole::BodySemi, 10.0)
        .color(palette::NAVY)
        .leading(16.0);
    y = c.text_block(left, y, PROBLEM_LEAD, &lead) - 2.0;

    let bullet = TextStyle::body(9.5).leading(14.5);
    for problem in PROBLEMS {
        y = c.bullet(left, y, problem, palette::TERRACOTTA, &bullet) - 2.0;
    }
    y -= 12.0;

    let body = TextStyle::body(9.5).leading(15.0);
    let emphasis = TextStyle::new(FontRole::BodySemi, 9.5)
        .color(palette::NAVY)
        .leading(15.0);

    y = c.section_heading(y, "The Strategic Argument", palette::UKRAINE_BLUE);
    y = c.callout(y, SOLAR_SCHOOL_ARGUMENT, palette::UKRAINE_BLUE);
    y = c.text_block(left, y, RESILIENCE, &body) - 4.0;
    y = c.text_block(left, y, CIVILIAN_ONLY, &emphasis) - 16.0;

    y = c.section_heading(y, "The Solution", palette::GREEN);
    y = c.text_block(left, y, SOLUTION, &body) - 4.0;
    Ok(c.text_block(left, y, CATEGORIES, &body))
}

fn process_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<f32, RenderError> {
    let mut y = content_page(c, 3, PAGES)?;
    y = c.section_heading(y, "How the Platform Works", palette::UKRAINE_BLUE) - 4.0;
    for (i, step) in FULL_STEPS.iter().enumerate() {
        y = c.numbered_step(y, i + 1, step);
    }
    Ok(y)
}

fn accountability_page<S: Surface + ?Sized>(
    c: &mut Compositor<'_, S>,
) -> Result<f32, RenderError> {
    let left = c.left();
    let width = c.content_width();
    let mut y = content_page(c, 4, PAGES)?;

    y = c.section_heading(y, "Transparency & Accountability", palette::UKRAINE_BLUE);
    let intro = TextStyle::body(9.5).leading(15.0);
    y = c.text_block(left, y, ACCOUNTABILITY_INTRO, &intro) - 14.0;

    let bullet = TextStyle::body(8.5).leading(13.0).width(width - 16.0);
    for section in ACCOUNTABILITY {
        y = c.underlined_heading(y, section.title, section.color);
        for item in section.bullets {
            y = c.bullet(left, y, item, section.color, &bullet) - 1.0;
        }
        y -= 10.0;
    }
    Ok(y)
}

fn pipeline_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<f32, RenderError> {
    let mut y = content_page(c, 5, PAGES)?;

    y = c.section_heading(y, "The Project Pipeline", palette::UKRAINE_BLUE) - 2.0;
    y = c.stat_row(y, PIPELINE_STATS, &StatStyle::default()) - 4.0;

    y = c.sub_heading(y, "Project Categories", palette::NAVY);
    y = c.legend(y, CATEGORY_LEGEND);

    y = c.sub_heading(y, "Selected Projects", palette::NAVY);
    for card in SELECTED_PROJECTS {
        y = c.project_card(y, card);
    }
    y -= 4.0;

    y = c.sub_heading(y, "NGO Partners", palette::NAVY);
    y = c.logo_strip(y, NGO_LOGOS, 20.0, 16.0)? - 2.0;
    for partner in NGO_PARTNERS {
        y = partner_line(c, y, partner);
    }
    Ok(y)
}

/// Partner name followed by its description on the same baseline.
///
/// A description that does not fit beside the name is wrapped to the
/// content width: the first line stays beside the name and at most two
/// more are indented below it.
fn partner_line<S: Surface + ?Sized>(c: &mut Compositor<'_, S>, y: f32, partner: &NgoPartner) -> f32 {
    let left = c.left();
    let width = c.content_width();
    let name = TextStyle::new(FontRole::BodySemi, 8.5).color(palette::NAVY);
    let description = TextStyle::body(8.0).color(palette::CHARCOAL_60);

    c.text_at(left, y, partner.name, &name);
    let name_w = c.text_width(partner.name, name.role, name.size);
    let desc_x = left + name_w + 8.0;

    let desc_w = c.text_width(partner.description, description.role, description.size);
    if desc_w <= width - name_w - 12.0 {
        c.text_at(desc_x, y, partner.description, &description);
        return y - 14.0;
    }

    let lines = c.wrap(partner.description, description.role, description.size, width - 12.0);
    let shown = lines.len().min(3);
    for (j, line) in lines.iter().take(shown).enumerate() {
        if j == 0 {
            c.text_at(desc_x, y, line, &description);
        } else {
            c.text_at(left + 12.0, y - 12.0 * j as f32, line, &description);
        }
    }
    y - 12.0 * shown as f32 - 4.0
}

/// Team bios, fiscal sponsor, fees and the closing banner.
fn closing_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<(), RenderError> {
    let left = c.left();
    let mut y = content_page(c, 6, PAGES)?;

    y = c.section_heading(y, "Our Team", palette::UKRAINE_BLUE);
    let name = TextStyle::new(FontRole::BodySemi, 10.5).color(palette::NAVY);
    let role = TextStyle::body(8.5).color(palette::UKRAINE_BLUE);
    let bio = TextStyle::body(8.5).leading(13.0);
    for member in TEAM_BIOS {
        c.text_at(left, y, member.name, &name);
        c.text_at(left, y - 14.0, member.role, &role);
        y = match member.bio {
            Some(text) => c.text_block(left, y - 28.0, text, &bio),
            None => y - 28.0,
        };
        y -= 10.0;
    }
    y -= 4.0;

    y = c.section_heading(y, "Fiscal Sponsor", palette::GOLD);
    let sponsor = TextStyle::body(9.0).leading(14.0);
    y = c.text_block(left, y, FISCAL_SPONSOR, &sponsor) - 6.0;
    y = c.sponsor_logos(y, 32.0)?;

    let reference = TextStyle::body(8.0).color(palette::CHARCOAL_60);
    c.text_at(left, y, SPONSOR_REFERENCE, &reference);
    y -= 16.0;

    y = fee_section(c, y, "Fee Structure", FEE_NOTE_ZERO);
    c.check_overflow(y);

    let bottom = if y > CTA_PIN_THRESHOLD {
        (y - CTA_HEIGHT - 8.0).max(CTA_MIN_BOTTOM)
    } else {
        CTA_MIN_BOTTOM
    };
    c.call_to_action(
        bottom,
        &CallToAction {
            headline: "Fund a project  \u{2022}  Become an NGO partner",
            headline_size: 13.0,
            subline: "hromadaproject.org  |  contact@hromadaproject.org",
            height: CTA_HEIGHT,
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use hromada_compositor::{LogoCatalog, Theme};
    use hromada_render_core::{DrawOp, ImageAsset, RecordingSurface};
    use std::sync::Arc;

    fn render(logos: &LogoCatalog) -> RecordingSurface {
        let theme = Theme::new(Assets::default().fonts);
        let mut surface = RecordingSurface::default();
        let mut c = Compositor::new(&mut surface, &theme, logos);
        compose(&mut c).unwrap();
        surface
    }

    fn asset(name: &str) -> ImageAsset {
        ImageAsset::new(name, Arc::new(vec![0u8; 4]))
    }

    #[test]
    fn cover_is_navy_without_furniture() {
        let surface = render(&LogoCatalog::new());
        let cover = &surface.pages()[0];
        assert_eq!(
            cover[0],
            DrawOp::Rect {
                rect: Rect::new(0.0, 0.0, 612.0, 792.0),
                color: palette::NAVY
            }
        );
        let texts: Vec<&str> = surface.texts_on(0).into_iter().map(|(_, t)| t).collect();
        assert!(texts.contains(&"hromada"));
        assert!(texts.contains(&COVER_DATE));
        assert!(!texts.iter().any(|t| t.contains(" / 6")));
    }

    #[test]
    fn content_pages_are_numbered() {
        let surface = render(&LogoCatalog::new());
        assert_eq!(surface.page_count(), PAGES);
        for page in 2..=PAGES {
            let label = format!("{} / {}", page, PAGES);
            let texts = surface.texts_on(page - 1);
            assert!(texts.iter().any(|(_, t)| *t == label), "missing {}", label);
        }
    }

    #[test]
    fn every_step_is_numbered_in_order() {
        let surface = render(&LogoCatalog::new());
        let texts: Vec<&str> = surface.texts_on(2).into_iter().map(|(_, t)| t).collect();
        for n in 1..=FULL_STEPS.len() {
            assert!(texts.contains(&n.to_string().as_str()));
        }
        assert!(texts.contains(&"Donor Dashboard & Updates"));
    }

    #[test]
    fn images_follow_the_catalog() {
        let mut logos = LogoCatalog::new().with_primary(asset("hromada"));
        logos.insert(asset("Ecoclub")).insert(asset("Candid"));
        let surface = render(&logos);

        let names = surface.image_names();
        // cover logo plus a header logo on each content page
        assert_eq!(names.iter().filter(|n| **n == "hromada").count(), PAGES);
        assert_eq!(names.iter().filter(|n| **n == "Ecoclub").count(), 1);
        assert_eq!(names.iter().filter(|n| **n == "Candid").count(), 1);
        assert!(!names.contains(&"Ecoaction"));
    }

    #[test]
    fn long_partner_description_wraps_under_name() {
        let surface = render(&LogoCatalog::new());
        let texts = surface.texts_on(4);
        let name = texts
            .iter()
            .find(|(_, t)| *t == "Ecoaction")
            .map(|(p, _)| *p)
            .expect("partner name");
        let continuation = texts
            .iter()
            .filter(|(p, _)| p.x == 66.0 && p.y < name.y && p.y >= name.y - 24.0)
            .count();
        assert!(continuation >= 1);
    }
}
